//! Show content: everything the player animates.
//!
//! A [`ShowSpec`] bundles the hero titles, the code-typing demo listing, the
//! output panel content, and the chat conversation pool. The built-in show
//! carries the ProgCero course material; a custom show can be loaded from a
//! TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::script::chat::ConversationPair;
use crate::script::sequenced::{LineSpec, SpanStyle, StyledLine, StyledSpan};
use crate::script::typewriter::TypewriterOptions;

/// A complete show: all content the TUI and the headless player run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSpec {
    /// Phrases cycled by the hero typewriter.
    pub hero_titles: Vec<String>,
    /// Single phrase cycled by the project-section typewriter.
    pub project_title: String,
    /// Code listing typed into the demo panel.
    pub code: Vec<LineSpec>,
    /// Header of the demo output panel.
    pub output_header: String,
    /// Items revealed and then completed in the output panel.
    pub tasks: Vec<String>,
    /// Pool the chat reply picks from.
    pub conversations: Vec<ConversationPair>,
}

impl ShowSpec {
    /// The built-in show.
    pub fn builtin() -> Self {
        Self {
            hero_titles: vec![
                "Aprende a Programar desde Cero".to_string(),
                "Construye Proyectos Reales".to_string(),
                "Inicia tu Carrera en Tecnología".to_string(),
            ],
            project_title: "Módulo 7: Primeros Pasos en un Proyecto Real".to_string(),
            code: builtin_code(),
            output_header: "Mi Lista de Tareas".to_string(),
            tasks: vec![
                "Aprender conceptos básicos de Python".to_string(),
                "Practicar con ejercicios de lógica".to_string(),
                "Desarrollar el proyecto final del curso".to_string(),
            ],
            conversations: builtin_conversations(),
        }
    }

    /// Loads a show from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read show file {}", path.display()))?;
        let show: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse show file {}", path.display()))?;
        show.validate()
            .with_context(|| format!("Invalid show file {}", path.display()))?;
        Ok(show)
    }

    /// Rejects shows that would make an engine constructor fail mid-run.
    pub fn validate(&self) -> Result<()> {
        if self.hero_titles.is_empty() {
            bail!("show has no hero titles");
        }
        if self.code.is_empty() {
            bail!("show has no code lines");
        }
        if self.conversations.is_empty() {
            bail!("show has no conversations");
        }
        Ok(())
    }

    /// Typewriter settings for the hero titles: cycles forever.
    pub fn hero_options() -> TypewriterOptions {
        TypewriterOptions {
            loop_forever: true,
            type_speed: Duration::from_millis(40),
            delete_speed: Duration::from_millis(25),
            pause_after_complete: Duration::from_millis(1500),
        }
    }

    /// Typewriter settings for the project title: same speeds, longer hold
    /// so the single phrase stays readable between rewrites.
    pub fn project_options() -> TypewriterOptions {
        TypewriterOptions {
            loop_forever: true,
            type_speed: Duration::from_millis(40),
            delete_speed: Duration::from_millis(25),
            pause_after_complete: Duration::from_millis(2500),
        }
    }
}

fn span(text: &str, style: SpanStyle) -> StyledSpan {
    StyledSpan::new(text, style)
}

fn plain(text: &str) -> StyledSpan {
    span(text, SpanStyle::Plain)
}

fn kw(text: &str) -> StyledSpan {
    span(text, SpanStyle::Keyword)
}

fn func(text: &str) -> StyledSpan {
    span(text, SpanStyle::Function)
}

fn punct(text: &str) -> StyledSpan {
    span(text, SpanStyle::Punctuation)
}

fn line(raw: &str, spans: Vec<StyledSpan>) -> LineSpec {
    LineSpec {
        plain: raw.to_string(),
        styled: StyledLine { spans },
    }
}

fn blank() -> LineSpec {
    LineSpec {
        plain: String::new(),
        styled: StyledLine::default(),
    }
}

/// The Python task-manager listing typed by the demo.
fn builtin_code() -> Vec<LineSpec> {
    vec![
        line(
            "# Lógica: Python | Diseño: HTML/CSS",
            vec![span(
                "# Lógica: Python | Diseño: HTML/CSS",
                SpanStyle::Comment,
            )],
        ),
        line(
            "class Task:",
            vec![kw("class"), plain(" "), func("Task"), punct(":")],
        ),
        line(
            "    def __init__(self, name):",
            vec![
                plain("    "),
                kw("def"),
                plain(" "),
                func("__init__"),
                punct("("),
                plain("self, name"),
                punct("):"),
            ],
        ),
        line(
            "        self.name = name",
            vec![plain("        self.name = name")],
        ),
        line(
            "        self.done = False",
            vec![plain("        self.done = "), kw("False")],
        ),
        blank(),
        line(
            "class TaskManager:",
            vec![kw("class"), plain(" "), func("TaskManager"), punct(":")],
        ),
        line(
            "    def __init__(self):",
            vec![
                plain("    "),
                kw("def"),
                plain(" "),
                func("__init__"),
                punct("("),
                plain("self"),
                punct("):"),
            ],
        ),
        line(
            "        self.tasks = []",
            vec![plain("        self.tasks = []")],
        ),
        blank(),
        line(
            "    def add(self, task_name):",
            vec![
                plain("    "),
                kw("def"),
                plain(" "),
                func("add"),
                punct("("),
                plain("self, task_name"),
                punct("):"),
            ],
        ),
        line(
            "        self.tasks.append(Task(task_name))",
            vec![
                plain("        self.tasks.append("),
                func("Task"),
                plain("(task_name))"),
            ],
        ),
        blank(),
        line(
            "    def complete(self, index):",
            vec![
                plain("    "),
                kw("def"),
                plain(" "),
                func("complete"),
                punct("("),
                plain("self, index"),
                punct("):"),
            ],
        ),
        line(
            "        self.tasks[index].done = True",
            vec![plain("        self.tasks[index].done = "), kw("True")],
        ),
    ]
}

fn builtin_conversations() -> Vec<ConversationPair> {
    let pairs = [
        (
            "¡Hola! 👋 ¿Tienes alguna pregunta sobre el curso ProgCero?",
            "Puedo ayudarte con los horarios, el contenido o el proceso de inscripción. ¡Tú dirás!",
        ),
        (
            "¡Hey! Veo que te interesa la programación. ¿Te gustaría saber más sobre nuestro curso?",
            "Pregúntame lo que quieras, estoy para ayudarte. 😊",
        ),
        (
            "¡Qué bueno verte por aquí! ¿En qué puedo ayudarte hoy?",
            "Tenemos inscripciones abiertas. ¡No te quedes sin tu cupo!",
        ),
        (
            "¿Necesito saber programar para unirme? ¡Para nada!",
            "El curso está diseñado para principiantes. ¡Empezamos desde lo más básico!",
        ),
        (
            "¡Hola! ¿Te interesa saber qué proyectos podrás construir?",
            "Al final del curso, crearás tu propio gestor de tareas o incluso un pequeño juego. 🚀",
        ),
        (
            "¿Qué tal? ¿Tienes dudas sobre la certificación?",
            "Sí, al completar el curso recibirás un certificado para validar tus nuevas habilidades.",
        ),
    ];
    pairs
        .into_iter()
        .map(|(opener, follow_up)| ConversationPair {
            opener: opener.to_string(),
            follow_up: follow_up.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let show = ShowSpec::builtin();
        show.validate().unwrap();
        assert_eq!(show.hero_titles.len(), 3);
        assert_eq!(show.code.len(), 15);
        assert_eq!(show.tasks.len(), 3);
        assert_eq!(show.conversations.len(), 6);
    }

    /// A styled rendering may legally differ from its raw text; for the
    /// built-in listing the two agree, which this guards against typos.
    #[test]
    fn test_builtin_styled_matches_raw() {
        for line in ShowSpec::builtin().code {
            assert_eq!(line.styled.text(), line.plain);
        }
    }

    #[test]
    fn test_load_from_toml() {
        let show = ShowSpec::builtin();
        let toml = toml::to_string(&show).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let loaded = ShowSpec::load_from(file.path()).unwrap();
        assert_eq!(loaded, show);
    }

    #[test]
    fn test_load_rejects_empty_code() {
        let mut show = ShowSpec::builtin();
        show.code.clear();
        let toml = toml::to_string(&show).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let err = ShowSpec::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("no code lines"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = ShowSpec::load_from(Path::new("/nonexistent/show.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read"));
    }
}
