//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{
  delete_excluded_service, get_excluded_services, get_program_iepg, get_search, get_services,
  health_check, post_programs, post_services, put_excluded_service,
};
pub use routes::{create_router, run_server};
pub use state::AppState;
