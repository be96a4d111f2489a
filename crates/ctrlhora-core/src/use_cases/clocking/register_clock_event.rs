use ctrlhora_api_interface::types::ApiMessage;
use ctrlhora_models::ClockEventKind;

use crate::{
    use_cases::session::require_session::RequireSession, CoreContext, DomainError, Result,
};

pub struct RegisterClockEvent;

impl RegisterClockEvent {
    /// Register an entry or exit at the current position.
    ///
    /// Nothing is sent when the position is unknown.
    #[tracing::instrument(skip(self, ctx), fields(kind = %kind))]
    pub async fn run(&self, ctx: &CoreContext<'_>, kind: ClockEventKind) -> Result<ApiMessage> {
        let session = RequireSession.run(ctx).await?;
        if session.is_admin {
            return Err(DomainError::AdminCannotClock { kind });
        }

        let position = ctx.geolocation_service.current_position().await?;

        let message = ctx
            .api_service
            .clock_events_create(&session.access_token, kind, &position)
            .await
            .map_err(|e| DomainError::ClockEventFailed { kind, source: e })?;

        tracing::info!(%position, message = %message.message, "Clock event registered");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use ctrlhora_api_interface::{ApiError, MockApiService};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::tests::CoreContextTest;

    #[tokio::test]
    async fn run_entry() {
        let mut ctx = CoreContextTest::with_session("ana", false);
        ctx.set_position(-33.45, -70.66);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_clock_events_create()
                .once()
                .withf(|token, kind, position| {
                    token == "ana-token"
                        && *kind == ClockEventKind::Entry
                        && position.to_string() == "-33.45,-70.66"
                })
                .return_once(|_, _, _| Ok(ApiMessage::new("Entry registered")));
            svc
        };

        assert_eq!(
            RegisterClockEvent
                .run(&ctx.as_context(), ClockEventKind::Entry)
                .await
                .unwrap(),
            ApiMessage::new("Entry registered")
        );
    }

    #[tokio::test]
    async fn run_without_position_sends_nothing() {
        let mut ctx = CoreContextTest::with_session("ana", false);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_clock_events_create().never();
            svc
        };

        let err = RegisterClockEvent
            .run(&ctx.as_context(), ClockEventKind::Entry)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Geolocation unavailable");
    }

    #[tokio::test]
    async fn run_without_session() {
        let mut ctx = CoreContextTest::new();
        ctx.set_position(1.0, 2.0);

        assert!(matches!(
            RegisterClockEvent
                .run(&ctx.as_context(), ClockEventKind::Exit)
                .await,
            Err(DomainError::NotLoggedIn)
        ));
    }

    #[tokio::test]
    async fn run_admin_is_refused() {
        let mut ctx = CoreContextTest::with_session("root", true);
        ctx.set_position(1.0, 2.0);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_clock_events_create().never();
            svc
        };

        let err = RegisterClockEvent
            .run(&ctx.as_context(), ClockEventKind::Exit)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Administrators cannot register exits");
    }

    #[tokio::test]
    async fn run_server_error() {
        let mut ctx = CoreContextTest::with_session("ana", false);
        ctx.set_position(1.0, 2.0);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_clock_events_create().once().return_once(|_, _, _| {
                Err(ApiError::UnexpectedStatus {
                    status: 500,
                    detail: "Internal Server Error".into(),
                })
            });
            svc
        };

        let err = RegisterClockEvent
            .run(&ctx.as_context(), ClockEventKind::Exit)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Exit registration failed: server responded with status 500: Internal Server Error"
        );
    }
}
