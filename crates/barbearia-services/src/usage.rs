//! Plan usage aggregation
//!
//! Counts plan bookings in the current calendar month. Callers only invoke
//! this for approved plans; the aggregator itself never looks at the plan
//! status and never special-cases unlimited entitlements, it just counts.

use barbearia_core::models::{Appointment, Plan, PlanUsage};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone};

use crate::constants::{BEARD_SERVICE, CUT_KEYWORDS, EYEBROW_SERVICE};

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Inclusive first and last calendar day of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthWindow {
    /// The month containing `now`, in `now`'s time zone
    pub fn containing<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let today = now.date_naive();
        let first_day = today - Days::new(u64::from(today.day0()));
        let last_day = first_day + Months::new(1) - Days::new(1);
        Self {
            first_day,
            last_day,
        }
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    /// pt-BR label, e.g. "outubro de 2026"
    pub fn label(&self) -> String {
        format!(
            "{} de {}",
            MONTH_NAMES[self.first_day.month0() as usize],
            self.first_day.year()
        )
    }
}

/// Which counters a service falls into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceKinds {
    pub cut: bool,
    pub beard: bool,
    pub eyebrow: bool,
}

/// Classify a service by its name or id (case-insensitive)
///
/// Cuts match on keyword containment; beard and eyebrow need an exact match.
pub fn classify_service(service_name: &str, service_id: &str) -> ServiceKinds {
    let name = service_name.to_lowercase();
    let id = service_id.to_lowercase();

    ServiceKinds {
        cut: CUT_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword) || id.contains(keyword)),
        beard: name == BEARD_SERVICE || id == BEARD_SERVICE,
        eyebrow: name == EYEBROW_SERVICE || id == EYEBROW_SERVICE,
    }
}

/// Count month-to-date plan usage
///
/// `now` fixes both the month and the time zone the appointment start
/// times are read in.
pub fn calculate_plan_usage<Tz: TimeZone>(
    _plan: &Plan,
    appointments: &[Appointment],
    now: &DateTime<Tz>,
) -> PlanUsage {
    let window = MonthWindow::containing(now);
    let tz = now.timezone();

    let mut usage = PlanUsage {
        month_name: window.label(),
        ..Default::default()
    };

    for appointment in appointments.iter().filter(|a| {
        a.counts_against_plan() && window.contains(a.starts_at.with_timezone(&tz).date_naive())
    }) {
        usage.total += 1;

        let kinds = classify_service(&appointment.service_name, &appointment.service_id);
        if kinds.cut {
            usage.cuts += 1;
        }
        if kinds.beard {
            usage.beards += 1;
        }
        if kinds.eyebrow {
            usage.eyebrows += 1;
        }
    }

    usage
}
