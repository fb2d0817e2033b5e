use serde::Serialize;
use tera::{Context, Tera};
use vitalcheck_scoring::guidance::{self, GuidanceModule};

use crate::error::ExportError;
use crate::report::HealthReport;

pub const VITALS_SUMMARY_TEMPLATE: &str = "\
HEALTH ASSESSMENT - VITALS SUMMARY
Date: {{ date }}

MEASUREMENTS
{% for m in measurements -%}
{{ m.name }}: {% if m.value %}{{ m.value }} ({{ m.status }}){% else %}Not entered{% endif %}
{% endfor %}
ADVISORY
{{ advisory }}

DISCLAIMER
{{ disclaimer }}
";

pub const RESULTS_SUMMARY_TEMPLATE: &str = "\
HEALTH RISK ASSESSMENT SUMMARY
Date: {{ date }}

YOUR MEASUREMENTS
{% for m in measurements -%}
{{ m.name }}: {{ m.value_text }} ({{ m.status }})
{% endfor %}
RISK ASSESSMENT
CBAC Score: {{ cbac_total }} ({{ cbac_tier }})
{% if needs_consultation %}A consultation is recommended.
{% endif %}
{%- if reported_symptoms %}
REPORTED SYMPTOMS
{% for s in reported_symptoms -%}
- {{ s }}
{% endfor %}{% endif %}
{%- if key_advice %}
KEY RECOMMENDATIONS
{% for item in key_advice -%}
- {{ item }}
{% endfor %}{% endif %}
{%- if focus_areas %}
YOUR FOCUS AREAS
{% for module in focus_areas -%}
{{ module.title }}
{% for step in module.steps -%}
- {{ step }}
{% endfor %}
{%- if module.note %}{{ module.note }}
{% endif %}{% endfor %}{% elif healthy_habits %}
{{ healthy_habits }}
{% endif %}
{%- if diet_tips or sugar_tips %}
DIET GUIDANCE
{% for item in diet_tips -%}
- {{ item }}
{% endfor %}
{%- if sugar_tips %}For blood sugar management:
{% for item in sugar_tips -%}
- {{ item }}
{% endfor %}{% endif %}{% endif %}
{%- if activity_tips %}
ACTIVITY GUIDANCE
{% for item in activity_tips -%}
- {{ item }}
{% endfor %}{% endif %}
DISCLAIMER
{{ disclaimer }}

PRIVACY
{{ privacy }}
";

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The fields of `context` become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &impl Serialize,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the context to a Tera context via serde_json
    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Text offered for download from the advisory screen.
pub fn render_vitals_summary(report: &HealthReport) -> Result<String, ExportError> {
    let rendered = render_template(
        "vitals_summary.txt",
        VITALS_SUMMARY_TEMPLATE,
        &TemplateView::from(report),
    )?;
    tracing::info!("rendered vitals summary");
    Ok(rendered)
}

/// Plain-text counterpart of the PDF report.
pub fn render_results_summary(report: &HealthReport) -> Result<String, ExportError> {
    let rendered = render_template(
        "results_summary.txt",
        RESULTS_SUMMARY_TEMPLATE,
        &TemplateView::from(report),
    )?;
    tracing::info!("rendered results summary");
    Ok(rendered)
}

/// Display-ready strings, so templates carry no formatting logic.
#[derive(Serialize)]
struct TemplateView<'a> {
    date: String,
    measurements: Vec<MeasurementView>,
    cbac_total: u32,
    cbac_tier: &'static str,
    needs_consultation: bool,
    reported_symptoms: Vec<String>,
    key_advice: &'a [String],
    focus_areas: &'a [GuidanceModule],
    healthy_habits: Option<&'a str>,
    diet_tips: &'a [String],
    sugar_tips: &'a [String],
    activity_tips: &'a [String],
    advisory: &'static str,
    disclaimer: &'static str,
    privacy: &'static str,
}

#[derive(Serialize)]
struct MeasurementView {
    name: String,
    value: Option<String>,
    value_text: String,
    status: String,
}

impl<'a> From<&'a HealthReport> for TemplateView<'a> {
    fn from(report: &'a HealthReport) -> Self {
        let summary = &report.summary;
        TemplateView {
            date: report.display_date(),
            measurements: summary
                .measurements
                .iter()
                .map(|row| MeasurementView {
                    name: row.name.clone(),
                    value: row.value.clone(),
                    value_text: row.value_or_placeholder().to_string(),
                    status: row.badge_label().to_string(),
                })
                .collect(),
            cbac_total: summary.cbac.total,
            cbac_tier: summary.cbac.tier.label(),
            needs_consultation: summary.needs_consultation,
            reported_symptoms: report.reported_symptom_labels(),
            key_advice: &summary.key_advice,
            focus_areas: &summary.focus_areas,
            healthy_habits: summary.healthy_habits.as_deref(),
            diet_tips: &summary.diet_tips,
            sugar_tips: &summary.sugar_tips,
            activity_tips: &summary.activity_tips,
            advisory: guidance::VITALS_ADVISORY,
            disclaimer: guidance::DISCLAIMER,
            privacy: guidance::PRIVACY_NOTE,
        }
    }
}
