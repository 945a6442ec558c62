//! Transcript Emitter
//!
//! Mirrors every real construction as one `let` statement so the graph can
//! be rebuilt later without discovery. Statements are appended in
//! construction order; adopted or back-registered instances are never
//! re-emitted, later statements just reference their symbol.

use ioc_domain::entities::{Argument, Arguments};
use ioc_domain::value_objects::{CapabilityKey, Requirement};

/// Append-only list of construction statements
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    statements: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a constructor call producing a concrete value
    pub fn record_constructor(
        &mut self,
        symbol: &str,
        invocation: &str,
        requirements: &[Requirement],
        arguments: &Arguments,
    ) {
        self.statements.push(format!(
            "let {symbol} = Arc::new({invocation}({}));",
            render_arguments(requirements, arguments)
        ));
    }

    /// Record a factory call producing a shared value or a vector of them
    pub fn record_factory(
        &mut self,
        symbol: &str,
        invocation: &str,
        requirements: &[Requirement],
        arguments: &Arguments,
    ) {
        self.statements.push(format!(
            "let {symbol} = {invocation}({});",
            render_arguments(requirements, arguments)
        ));
    }

    /// Statements recorded so far, in construction order
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Render the statements as a function returning `root`
    ///
    /// ```
    /// use ioc_application::engine::Transcript;
    /// use ioc_domain::value_objects::CapabilityKey;
    ///
    /// let key = CapabilityKey::named("dyn app::IRun");
    /// let text = Transcript::new().render("create", &key, "_000_run");
    /// assert!(text.starts_with("pub fn create() -> Arc<dyn app::IRun> {"));
    /// ```
    pub fn render(&self, function: &str, capability: &CapabilityKey, root: &str) -> String {
        let mut text = format!("pub fn {function}() -> Arc<{capability}> {{\n");
        for statement in &self.statements {
            text.push_str("    ");
            text.push_str(statement);
            text.push('\n');
        }
        text.push_str("    ");
        text.push_str(&reference(root));
        text.push_str("\n}\n");
        text
    }
}

/// Expression reusing an already bound symbol
///
/// Plain variables are moved, array elements have to be cloned out.
fn reference(symbol: &str) -> String {
    if symbol.ends_with(']') {
        format!("{symbol}.clone()")
    } else {
        symbol.to_string()
    }
}

/// Parameter list of a call
///
/// Collection elements are cast to the capability so a vector of different
/// concrete types still has one element type.
fn render_arguments(requirements: &[Requirement], arguments: &Arguments) -> String {
    arguments
        .iter()
        .zip(requirements)
        .map(|(argument, requirement)| match argument {
            Argument::Single(_) => format!("{}.clone()", argument.symbols().concat()),
            Argument::Collection(_) => format!(
                "vec![{}]",
                argument
                    .symbols()
                    .iter()
                    .map(|symbol| format!("{symbol}.clone() as Arc<{}>", requirement.capability()))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
