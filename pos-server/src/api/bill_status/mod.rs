//! Bill Status API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/billstatus | GET | All bills |
//! | /api/billstatus | POST | Place a bill |
//! | /api/billstatus/new | GET | Highest bill id |
//! | /api/billstatus/today | GET | Bills of the current local day |
//! | /api/billstatus/user/{id} | GET | Bills of a user |
//! | /api/billstatus/bill/{id} | GET | One bill |
//! | /api/billstatus/{id} | PUT | Advance to the next stage |
//! | /api/billstatus/paid/{id} | PUT | Mark paid |
//! | /api/billstatus/cancel/{id} | PUT | Cancel |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/billstatus", get(handler::list).post(handler::create))
        .route("/api/billstatus/", get(handler::list).post(handler::create))
        .route("/api/billstatus/new", get(handler::newest))
        .route("/api/billstatus/today", get(handler::today))
        .route("/api/billstatus/user/{id}", get(handler::list_by_user))
        .route("/api/billstatus/bill/{id}", get(handler::get_by_id))
        .route("/api/billstatus/{id}", put(handler::advance))
        .route("/api/billstatus/paid/{id}", put(handler::mark_paid))
        .route("/api/billstatus/cancel/{id}", put(handler::cancel))
}
