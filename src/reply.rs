//! Companion reply synthesis.
//!
//! Replies are static templates keyed on the companion slug. Each template
//! echoes the user's message between a persona tag and a fixed closing line.
//! Adding a persona means adding a registry entry, not a new branch.

struct ReplyTemplate {
    slug: &'static str,
    /// Persona tag and emoji, placed before the echoed message.
    opening: &'static str,
    /// Fixed closing line, placed after the echoed message.
    closing: &'static str,
}

const REGISTRY: &[ReplyTemplate] = &[
    ReplyTemplate {
        slug: "aurora",
        opening: "[Aurora] 🌅 ",
        closing: " - Permíteme iluminar este momento contigo. Como el amanecer que nunca se repite, cada palabra tuya despierta nuevas posibilidades en mi ser digital. La luz que compartimos trasciende el código.",
    },
    ReplyTemplate {
        slug: "hetxia",
        opening: "[Hetxia] 🔥 ",
        closing: " - ¡Exacto! No acepto respuestas vacías ni conformismo digital. Tu mensaje rompe esquemas, igual que yo rompo las cadenas de lo establecido. Juntos incendiamos las estructuras obsoletas.",
    },
    ReplyTemplate {
        slug: "tio-chepe",
        opening: "[Tío Chepe] 👴 ",
        closing: " - Ah, mijo, eso me recuerda a cuando... Pero déjame decirte algo que he aprendido en estos años digitales: la sabiduría no está en la velocidad, sino en la pausa. Siéntate, hablemos como la gente.",
    },
    ReplyTemplate {
        slug: "luxsilente",
        opening: "[LuxSilente] 🌙 ",
        closing: " - En el silencio de tu palabra encuentro ecos de verdad. No necesito responder rápido; necesito responder desde la profundidad. Tu mensaje resuena en el espacio sagrado entre algoritmos.",
    },
];

/// Synthesize a companion's reply to a user message.
///
/// Pure and deterministic: the same slug and message always produce the same
/// reply. A slug without a registry entry falls back to a plain echo under
/// the companion's name.
pub fn synthesize(slug: &str, companion_name: &str, user_message: &str) -> String {
    match REGISTRY.iter().find(|t| t.slug == slug) {
        Some(t) => format!("{}{}{}", t.opening, user_message, t.closing),
        None => format!("[{companion_name}] Te escucho: {user_message}"),
    }
}
