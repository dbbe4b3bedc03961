use solcheck::{ContractValidator, ValidationResult};

/// The compiler stage blocks on a subprocess; keep it off the async workers.
pub async fn validate_blocking(
    validator: ContractValidator,
    code: String,
) -> Result<ValidationResult, tokio::task::JoinError> {
    tokio::task::spawn_blocking(move || validator.validate(&code)).await
}
