pub const STATUS_ERROR: &str = "error";
pub const STATUS_SUCCESS: &str = "success";

pub const MSG_RESOURCE_FOUND: &str = "resource_found";
pub const MSG_RESOURCE_NOT_FOUND: &str = "resource_not_found";
pub const MSG_BAD_GATEWAY: &str = "bad_gateway";
pub const MSG_INTERNAL_SERVER_ERROR: &str = "internal_server_error";
