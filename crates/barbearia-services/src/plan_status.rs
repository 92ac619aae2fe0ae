//! Plan status service
//!
//! Fetches a user's plan and appointments through the repository traits
//! and computes month-to-date usage. Usage is only computed for approved
//! plans; nothing is cached, every call recomputes from the datastore and
//! reads the shop time zone from the current configuration.

use barbearia_core::{
    models::{Plan, PlanUsage},
    traits::{AppointmentRepository, PlanRepository},
    AppResult, SharedConfig,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::usage::calculate_plan_usage;

/// An approved plan together with its usage this month
#[derive(Debug, Clone, Serialize)]
pub struct PlanOverview {
    pub plan: Plan,
    pub usage: PlanUsage,
}

/// Plan status service
pub struct PlanStatusService<P: PlanRepository, A: AppointmentRepository> {
    plan_repo: Arc<P>,
    appointment_repo: Arc<A>,
    config: SharedConfig,
}

impl<P: PlanRepository, A: AppointmentRepository> PlanStatusService<P, A> {
    /// Create a new plan status service
    ///
    /// The shop time zone in `config` decides where calendar months start
    /// and end; it is read on every call, so a refresh takes effect at once.
    pub fn new(plan_repo: Arc<P>, appointment_repo: Arc<A>, config: SharedConfig) -> Self {
        Self {
            plan_repo,
            appointment_repo,
            config,
        }
    }

    /// Plan and usage for a user at `now`
    ///
    /// Returns `Ok(None)` when the user has no plan or the plan is not
    /// approved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the configured time zone is invalid,
    /// or whatever the repositories return.
    #[instrument(skip(self))]
    pub async fn usage_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<Option<PlanOverview>> {
        let plan = match self.plan_repo.find_by_user(user_id).await? {
            Some(plan) => plan,
            None => {
                debug!("User has no plan");
                return Ok(None);
            }
        };

        if !plan.is_active() {
            debug!("Plan {} is {}, skipping usage", plan.id, plan.status);
            return Ok(None);
        }

        let timezone = self.config.timezone()?;
        let appointments = self.appointment_repo.list_by_user(user_id).await?;
        let usage = calculate_plan_usage(&plan, &appointments, &now.with_timezone(&timezone));

        debug!(
            "Usage for {}: {} total, {} cuts, {} beards, {} eyebrows",
            usage.month_name, usage.total, usage.cuts, usage.beards, usage.eyebrows
        );

        Ok(Some(PlanOverview { plan, usage }))
    }

    /// Same as [`usage_for_user`](Self::usage_for_user) at the current time
    pub async fn current_usage(&self, user_id: Uuid) -> AppResult<Option<PlanOverview>> {
        self.usage_for_user(user_id, Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use barbearia_core::{
        models::{Appointment, AppointmentStatus, PlanIncludes, PlanType},
        AppConfig, AppError,
    };
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockPlanRepository {
        plan: Option<Plan>,
    }

    #[async_trait]
    impl PlanRepository for MockPlanRepository {
        async fn find_by_user(&self, _user_id: Uuid) -> AppResult<Option<Plan>> {
            Ok(self.plan.clone())
        }
    }

    struct MockAppointmentRepository {
        appointments: Vec<Appointment>,
        calls: AtomicUsize,
    }

    impl MockAppointmentRepository {
        fn new(appointments: Vec<Appointment>) -> Self {
            Self {
                appointments,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AppointmentRepository for MockAppointmentRepository {
        async fn list_by_user(&self, _user_id: Uuid) -> AppResult<Vec<Appointment>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.appointments.clone())
        }
    }

    struct FailingAppointmentRepository;

    #[async_trait]
    impl AppointmentRepository for FailingAppointmentRepository {
        async fn list_by_user(&self, _user_id: Uuid) -> AppResult<Vec<Appointment>> {
            Err(AppError::Datastore("connection reset".to_string()))
        }
    }

    fn plan(user_id: Uuid, approved: bool) -> Plan {
        let mut plan = Plan::request(user_id, PlanType::ClubCorte, PlanIncludes::default());
        if approved {
            plan.approve(Utc::now()).unwrap();
        }
        plan
    }

    fn config_with_timezone(timezone: &str) -> SharedConfig {
        let mut config = AppConfig::default();
        config.shop.timezone = timezone.to_string();
        SharedConfig::new(config)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 15, 0, 0).unwrap()
    }

    fn social_cut(user_id: Uuid) -> Appointment {
        Appointment {
            user_id,
            starts_at: Utc.with_ymd_and_hms(2026, 10, 5, 14, 0, 0).unwrap(),
            service_name: "Social".to_string(),
            service_id: "social".to_string(),
            status: AppointmentStatus::Completed,
            is_plan_booking: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_usage_for_approved_plan() {
        let user_id = Uuid::new_v4();
        let service = PlanStatusService::new(
            Arc::new(MockPlanRepository {
                plan: Some(plan(user_id, true)),
            }),
            Arc::new(MockAppointmentRepository::new(vec![social_cut(user_id)])),
            SharedConfig::new(AppConfig::default()),
        );

        let overview = service.usage_for_user(user_id, now()).await.unwrap().unwrap();
        assert_eq!(overview.plan.user_id, user_id);
        assert_eq!(overview.usage.total, 1);
        assert_eq!(overview.usage.cuts, 1);
        assert_eq!(overview.usage.month_name, "outubro de 2026");
    }

    #[tokio::test]
    async fn test_pending_plan_skips_appointments() {
        let user_id = Uuid::new_v4();
        let appointments = Arc::new(MockAppointmentRepository::new(vec![social_cut(user_id)]));
        let service = PlanStatusService::new(
            Arc::new(MockPlanRepository {
                plan: Some(plan(user_id, false)),
            }),
            appointments.clone(),
            SharedConfig::new(AppConfig::default()),
        );

        assert!(service.usage_for_user(user_id, now()).await.unwrap().is_none());
        assert_eq!(appointments.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_plan() {
        let service = PlanStatusService::new(
            Arc::new(MockPlanRepository { plan: None }),
            Arc::new(MockAppointmentRepository::new(Vec::new())),
            SharedConfig::new(AppConfig::default()),
        );
        assert!(service
            .usage_for_user(Uuid::new_v4(), now())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_datastore_error_propagates() {
        let user_id = Uuid::new_v4();
        let service = PlanStatusService::new(
            Arc::new(MockPlanRepository {
                plan: Some(plan(user_id, true)),
            }),
            Arc::new(FailingAppointmentRepository),
            SharedConfig::new(AppConfig::default()),
        );

        let err = service.usage_for_user(user_id, now()).await.unwrap_err();
        assert_eq!(err.error_code(), "datastore_error");
    }

    #[tokio::test]
    async fn test_month_boundary_follows_config_replace() {
        let user_id = Uuid::new_v4();
        // 31 October 22:00 in São Paulo, already 1 November in UTC
        let late_evening = Appointment {
            starts_at: Utc.with_ymd_and_hms(2026, 11, 1, 1, 0, 0).unwrap(),
            ..social_cut(user_id)
        };
        let config = config_with_timezone("America/Sao_Paulo");
        let service = PlanStatusService::new(
            Arc::new(MockPlanRepository {
                plan: Some(plan(user_id, true)),
            }),
            Arc::new(MockAppointmentRepository::new(vec![late_evening])),
            config.clone(),
        );
        let at = Utc.with_ymd_and_hms(2026, 10, 20, 15, 0, 0).unwrap();

        let overview = service.usage_for_user(user_id, at).await.unwrap().unwrap();
        assert_eq!(overview.usage.total, 1);

        let mut utc = AppConfig::default();
        utc.shop.timezone = "UTC".to_string();
        config.replace(utc);

        let overview = service.usage_for_user(user_id, at).await.unwrap().unwrap();
        assert_eq!(overview.usage.total, 0);
        assert_eq!(overview.usage.month_name, "outubro de 2026");
    }

    #[tokio::test]
    async fn test_invalid_timezone_is_config_error() {
        let user_id = Uuid::new_v4();
        let service = PlanStatusService::new(
            Arc::new(MockPlanRepository {
                plan: Some(plan(user_id, true)),
            }),
            Arc::new(MockAppointmentRepository::new(Vec::new())),
            config_with_timezone("Mars/Olympus"),
        );

        let err = service.usage_for_user(user_id, now()).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_current_usage_uses_current_month() {
        let user_id = Uuid::new_v4();
        let this_month = Appointment {
            starts_at: Utc::now(),
            ..social_cut(user_id)
        };
        let service = PlanStatusService::new(
            Arc::new(MockPlanRepository {
                plan: Some(plan(user_id, true)),
            }),
            Arc::new(MockAppointmentRepository::new(vec![this_month])),
            config_with_timezone("UTC"),
        );

        let overview = service.current_usage(user_id).await.unwrap().unwrap();
        assert_eq!(overview.usage.total, 1);
        assert_eq!(overview.usage.cuts, 1);
    }
}
