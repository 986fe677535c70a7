//! `mailto:` links for the site's call-to-action buttons.

use url::form_urlencoded;

pub const CONSULTATION_ADDRESS: &str = "finmodelguru@gmail.com";
pub const CONSULTATION_BODY: &str = "Здравствуйте, я хочу записаться на консультацию.";

/// Subjects used by the site's buttons and forms.
pub mod email_subjects {
  pub const CONSULTATION: &str = "Консультация";
  pub const TRAINING: &str = "Обучение";
  pub const CONSULTING: &str = "Финансовый консалтинг";
  pub const CFO_SERVICE: &str = "CFO сервис";
  pub const GENERAL_INQUIRY: &str = "Общий запрос";
}

/// Source page identifiers sent with tracking events.
pub mod source_pages {
  pub const HOME: &str = "home";
  pub const TRAINING: &str = "training";
  pub const CONSULTING: &str = "financial-consulting";
  pub const CFO: &str = "cfo-service";
  pub const CONTACT: &str = "contact";
}

#[derive(Debug, Clone, Default)]
pub struct MailtoOptions<'a> {
  pub to: &'a str,
  pub subject: Option<&'a str>,
  pub body: Option<&'a str>,
  pub cc: Option<&'a str>,
  pub bcc: Option<&'a str>,
}

/// Build `mailto:<to>?subject=..&body=..&cc=..&bcc=..`, skipping absent or
/// empty parameters. Values are form-urlencoded, so spaces become `+`.
pub fn generate_mailto_link(opts: &MailtoOptions<'_>) -> String {
  let mut params = form_urlencoded::Serializer::new(String::new());
  let mut any = false;
  for (key, value) in [
    ("subject", opts.subject),
    ("body", opts.body),
    ("cc", opts.cc),
    ("bcc", opts.bcc),
  ] {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
      params.append_pair(key, v);
      any = true;
    }
  }
  if any {
    format!("mailto:{}?{}", opts.to, params.finish())
  } else {
    format!("mailto:{}", opts.to)
  }
}

/// Link opened by every "book a consultation" button.
pub fn consultation_mailto_link() -> String {
  generate_mailto_link(&MailtoOptions {
    to: CONSULTATION_ADDRESS,
    subject: Some(email_subjects::CONSULTATION),
    body: Some(CONSULTATION_BODY),
    ..MailtoOptions::default()
  })
}
