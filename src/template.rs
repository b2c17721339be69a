use askama::Template;
use axum::response::Html;

use crate::error::AppError;

pub(crate) mod filters {
    /// `8800` -> `8,800`, like the EXP counters on the skill cards.
    #[askama::filter_fn]
    pub fn thousands(value: &u32, _values: &dyn askama::Values) -> askama::Result<String> {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }

        Ok(out)
    }
}

pub fn render<T: Template>(template: T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
