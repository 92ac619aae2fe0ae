//! Extra benefits of a fixed plan over a custom selection
//!
//! The order is fixed: cuts, beard, eyebrow, fixed schedule, product
//! discount, Saturday, Friday, priority. At most one priority line is
//! emitted, for the highest tier gained.

use barbearia_core::catalog::FixedPlan;
use barbearia_core::models::{CustomPlanSelection, DayCode, Priority};

/// List what `plan` grants beyond `selection`
pub fn get_extra_benefits(plan: &FixedPlan, selection: &CustomPlanSelection) -> Vec<String> {
    let includes = &plan.includes;
    let mut benefits = Vec::new();

    if includes.unlimited_cuts && !selection.unlimited_cuts {
        benefits.push("Cortes ilimitados".to_string());
    }
    if includes.unlimited_beard && !selection.unlimited_beard {
        benefits.push("Barba ilimitada".to_string());
    }
    if includes.eyebrow_included && !selection.eyebrow_included {
        benefits.push("Sobrancelha inclusa".to_string());
    }
    if includes.fixed_schedule && !selection.fixed_schedule {
        benefits.push("Horário fixo".to_string());
    }
    if includes.product_discount > selection.product_discount {
        benefits.push(format!(
            "{}% de desconto em produtos",
            includes.product_discount
        ));
    }
    if includes.allows_day(DayCode::Sab) && !selection.add_saturday {
        benefits.push("Atendimento aos sábados".to_string());
    }
    if includes.allows_day(DayCode::Sex) && !selection.add_friday {
        benefits.push("Atendimento às sextas".to_string());
    }

    if includes.priority == Priority::Max && selection.priority != Priority::Max {
        benefits.push("Prioridade máxima".to_string());
    } else if includes.priority == Priority::Medium && selection.priority == Priority::Normal {
        benefits.push("Prioridade média".to_string());
    }

    benefits
}
