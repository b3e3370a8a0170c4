use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use idv_core::domain::value_objects::CompleteVerificationRequest;
use idv_core::errors::DomainError;
use idv_core::services::verification::VerificationProviderTrait;
use idv_shared::types::ApiResponse;

use super::AppState;
use crate::dto::CompleteVerificationDto;
use crate::handlers::error::{domain_error_response, validation_response};
use crate::middleware::request_id::RequestIdExt;

pub const SUCCESS_MESSAGE: &str = "Verification completed successfully";
pub const FAILURE_MESSAGE: &str = "An error occurred while completing verification";

/// Handler for POST /api/verification/complete
///
/// # Request Body
///
/// ```json
/// {
///     "correlationId": "...",
///     "individual": {
///         "firstName": "Tod", "lastName": "Weedall",
///         "emailAddresses": ["tweedall@example.com"],
///         "addresses": [{ "address": "39 South Trail", "city": "San Antonio", "postCode": "78285" }],
///         "dob": "1984-12-10", "ssn": "565228370"
///     }
/// }
/// ```
pub async fn complete_verification<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    request: web::Json<CompleteVerificationDto>,
) -> HttpResponse
where
    P: VerificationProviderTrait + ?Sized + 'static,
{
    let request_id = req.request_id();

    if let Err(validation_errors) = request.0.validate() {
        log::warn!("[{}] Validation failed for complete request", request_id);
        return validation_response(&validation_errors);
    }

    let dto = request.into_inner();
    let command = match CompleteVerificationRequest::new(dto.correlation_id, dto.individual.into()) {
        Ok(command) => command,
        Err(e) => return domain_error_response(&request_id, &DomainError::from(e), FAILURE_MESSAGE),
    };

    log::info!(
        "[{}] Completing verification for correlation id: {}",
        request_id,
        command.correlation_id()
    );

    match state.verification_service.complete_verification(command).await {
        Ok(outcome) => {
            log::info!(
                "[{}] Verification completion finished, accepted: {}",
                request_id,
                outcome.is_accepted()
            );
            HttpResponse::Ok().json(ApiResponse::success(outcome, SUCCESS_MESSAGE))
        }
        Err(error) => domain_error_response(&request_id, &error, FAILURE_MESSAGE),
    }
}
