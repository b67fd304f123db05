/// What the front end shows when an operation fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub name: String,
    /// Code-style identifier, e.g. `product.name_empty`.
    pub message: String,
    /// Plain-language explanation for the terminal.
    pub description: String,
    pub exit_code: u8,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.name, self.description, self.message)
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> ErrorResponse;
}
