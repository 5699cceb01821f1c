//! Application constants and user-facing text

pub const SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbyZZufxDB7R-fhA6G31wuLI6981eAgtTOnjZ6MHWjANzx3-Gc79-8BQ7xeCYBZdhTKlTQ/exec";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Contact Form";

// Query parameter names expected by the form endpoint
pub const PARAM_NAME: &str = "nombre";
pub const PARAM_EMAIL: &str = "email";
pub const PARAM_SUBJECT: &str = "asunto";
pub const PARAM_MESSAGE: &str = "mensaje";

// Feedback messages
pub const MSG_MISSING_FIELDS: &str = "❌ Por favor completa todos los campos obligatorios.";
pub const MSG_INVALID_EMAIL: &str = "❌ Ingresa un correo electrónico válido.";
pub const MSG_SENT: &str = "✅ ¡Mensaje enviado correctamente!";
pub const MSG_SENT_UNCONFIRMED: &str = "✅ ¡Mensaje enviado!";

// Form labels and placeholders
pub const LABEL_NAME: &str = "Nombre *";
pub const LABEL_EMAIL: &str = "Email *";
pub const LABEL_SUBJECT: &str = "Asunto (opcional)";
pub const LABEL_MESSAGE: &str = "Mensaje *";
pub const HINT_NAME: &str = "Tu nombre";
pub const HINT_EMAIL: &str = "tu@email.com";
pub const HINT_SUBJECT: &str = "Asunto del mensaje";
pub const HINT_MESSAGE: &str = "Escribe tu mensaje aquí...";
pub const BUTTON_SUBMIT: &str = "Enviar mensaje";
pub const BUTTON_SUBMITTING: &str = "Enviando...";

pub const MESSAGE_ROWS: usize = 6;

/// Subject sent when the user leaves it blank
pub fn default_subject(name: &str) -> String {
    format!("Mensaje de {}", name)
}
