mod get_join_requests;
mod handle_join_request;
mod request_join;

use super::*;
