/// Short reason phrase for the status codes annotations commonly document.
///
/// Codes without an entry are labelled `"Response"`.
pub fn status_description(status_code: u16) -> &'static str {
    match status_code {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Response",
    }
}

pub const fn is_valid_status(status_code: u16) -> bool {
    status_code >= 100 && status_code <= 599
}
