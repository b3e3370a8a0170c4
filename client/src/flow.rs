//! The verification wizard
//!
//! ```text
//! Phone ──start──▶ Authenticate ──widget ok, validate accepted──▶ PersonalInfo ──complete──▶ Success
//!   ▲                   │
//!   └──widget failure───┘
//! ```
//!
//! A reload restores the correlation id but not the step; the wizard
//! always restarts at `Phone`.

use idv_core::domain::entities::{VerificationSession, VerificationStep, CORRELATION_ID_KEY};
use idv_core::domain::value_objects::{
    CompleteVerificationRequest, CompletionResult, IndividualProfile, ProviderOutcome,
    StartVerificationRequest, ValidateVerificationRequest, ValidationResult,
};
use idv_shared::utils::{digits_only, mask_phone_number};

use crate::api::VerificationApi;
use crate::auth::{AuthStrategy, Authenticator, DeviceClass};
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

pub struct VerificationFlow<A, U, S>
where
    A: VerificationApi,
    U: Authenticator,
    S: SessionStore,
{
    api: A,
    authenticator: U,
    store: S,
    strategy: AuthStrategy,
    session: VerificationSession,
}

impl<A, U, S> VerificationFlow<A, U, S>
where
    A: VerificationApi,
    U: Authenticator,
    S: SessionStore,
{
    /// Create the flow for the browser identified by `user_agent`
    pub fn new(api: A, authenticator: U, store: S, user_agent: &str) -> Self {
        let strategy = AuthStrategy::for_device(DeviceClass::from_user_agent(user_agent));
        let session = VerificationSession::resumed(store.get(CORRELATION_ID_KEY));

        if let Some(correlation_id) = &session.correlation_id {
            tracing::debug!(
                correlation_id = %correlation_id,
                event = "verification_session_resumed",
                "Restored correlation id from session storage"
            );
        }

        Self {
            api,
            authenticator,
            store,
            strategy,
            session,
        }
    }

    pub fn strategy(&self) -> AuthStrategy {
        self.strategy
    }

    pub fn session(&self) -> &VerificationSession {
        &self.session
    }

    pub fn current_step(&self) -> VerificationStep {
        self.session.current_step
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.session.correlation_id.as_deref()
    }

    /// Step 1 and 2: start, hand off to the widget, then validate
    ///
    /// Formatting characters are stripped from `phone_number` before it is
    /// sent. Ends on `PersonalInfo` when the provider accepts the phone,
    /// on `Phone` when the widget fails, and on `Authenticate` otherwise.
    pub async fn submit_phone(
        &mut self,
        phone_number: &str,
        last_four_ssn: &str,
    ) -> ClientResult<ValidationResult> {
        let request = StartVerificationRequest::new(
            digits_only(phone_number),
            last_four_ssn.to_string(),
            self.strategy.flow_type().to_string(),
        )?;

        tracing::info!(
            phone = %mask_phone_number(request.phone_number()),
            flow_type = request.flow_type(),
            event = "verification_flow_start",
            "Submitting phone number"
        );

        let started = self.api.start(&request).await?;
        self.store.set(CORRELATION_ID_KEY, &started.correlation_id);
        self.session
            .started(started.correlation_id.clone(), started.auth_token.clone());

        if let Err(e) = self
            .authenticator
            .authenticate(&started.auth_token, self.strategy)
            .await
        {
            tracing::warn!(
                error = %e,
                event = "verification_flow_auth_failed",
                "Authentication failed, returning to the phone step"
            );
            self.session.current_step = VerificationStep::Phone;
            return Err(e);
        }

        let validate = ValidateVerificationRequest::new(started.correlation_id)?;
        match self.api.validate(&validate).await? {
            ProviderOutcome::Accepted(result) => {
                self.session.current_step = VerificationStep::PersonalInfo;
                Ok(result)
            }
            ProviderOutcome::Rejected { reason } => Err(ClientError::Rejected(reason)),
        }
    }

    /// Step 3: submit the full profile
    ///
    /// On acceptance the wizard finishes and session storage is cleared.
    pub async fn submit_personal_info(
        &mut self,
        individual: IndividualProfile,
    ) -> ClientResult<CompletionResult> {
        let correlation_id = self
            .session
            .correlation_id
            .clone()
            .ok_or(ClientError::MissingSession)?;
        let request = CompleteVerificationRequest::new(correlation_id, individual)?;

        match self.api.complete(&request).await? {
            ProviderOutcome::Accepted(result) => {
                self.session.current_step = VerificationStep::Success;
                self.store.remove(CORRELATION_ID_KEY);
                tracing::info!(
                    correlation_id = request.correlation_id(),
                    event = "verification_flow_completed",
                    "Verification completed"
                );
                Ok(result)
            }
            ProviderOutcome::Rejected { reason } => Err(ClientError::Rejected(reason)),
        }
    }

    /// Forget the verification in progress and return to the first step
    pub fn reset(&mut self) {
        self.session.clear();
        self.store.remove(CORRELATION_ID_KEY);
    }
}
