use crate::error::{BindingDiagnostic, LayoutError};
use crate::layout::{FieldWrite, LayoutArena};
use crate::template::{BindingRule, IntoTemplate, LayoutTemplate};
use serde_json::Value;

mod resolution;

pub use resolution::{ValueLookup, ValuesMap, values_from_str};
pub(crate) use resolution::json_type_name;
use resolution::{Resolution, resolve};

/// What to do when a required input variable has neither a value nor a default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequiredPolicy {
    /// Leave the targets untouched, record a diagnostic and keep going.
    #[default]
    Skip,
    /// Abort the wiring call with `LayoutError::MissingRequiredValue`.
    Fail,
}

/// The result of a wiring call.
#[derive(Debug, Clone, PartialEq)]
pub struct WiringOutcome {
    /// The populated layout tree.
    pub layout: Value,
    /// Recoverable problems met along the way, in rule order.
    pub diagnostics: Vec<BindingDiagnostic>,
}

impl WiringOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn to_text(&self) -> Result<String, LayoutError> {
        Ok(serde_json::to_string(&self.layout)?)
    }
}

pub struct BinderBuilder {
    template: Result<LayoutTemplate, LayoutError>,
    policy: RequiredPolicy,
}

impl BinderBuilder {
    pub fn new(template: impl IntoTemplate) -> Self {
        Self {
            template: template.into_template(),
            policy: RequiredPolicy::default(),
        }
    }

    pub fn with_required_policy(mut self, policy: RequiredPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the layout into a name-indexed arena.
    ///
    /// Fails on malformed templates and on layouts where two components share a name.
    pub fn build(self) -> Result<Binder, LayoutError> {
        let template = self.template?;
        let arena = LayoutArena::from_tree(&template.layout)?;
        log::debug!(
            "Loaded layout with {} named component(s) and {} input variable(s)",
            arena.len(),
            template.input_variables.len()
        );
        Ok(Binder {
            rules: template.input_variables,
            arena,
            policy: self.policy,
        })
    }
}

/// Applies a template's input variables to its layout.
///
/// A `Binder` is built once per template and can wire any number of value
/// maps, from any number of threads. Every call works on its own copy of the
/// layout, so calls never observe each other.
#[derive(Debug, Clone)]
pub struct Binder {
    rules: Vec<BindingRule>,
    arena: LayoutArena,
    policy: RequiredPolicy,
}

impl Binder {
    pub fn builder(template: impl IntoTemplate) -> BinderBuilder {
        BinderBuilder::new(template)
    }

    pub fn new(template: impl IntoTemplate) -> Result<Self, LayoutError> {
        BinderBuilder::new(template).build()
    }

    pub fn rules(&self) -> &[BindingRule] {
        &self.rules
    }

    pub fn policy(&self) -> RequiredPolicy {
        self.policy
    }

    /// Populates a fresh copy of the layout from `values`.
    ///
    /// Rules are applied in list order, so when two rules write the same
    /// field the later one wins. Unknown target names and (under
    /// `RequiredPolicy::Skip`) unresolved required variables are reported in
    /// the outcome and never stop the pass.
    pub fn wire<V>(&self, values: &V) -> Result<WiringOutcome, LayoutError>
    where
        V: ValueLookup + ?Sized,
    {
        let mut arena = self.arena.clone();
        let mut diagnostics = Vec::new();
        let mut applied = 0usize;

        for rule in &self.rules {
            let value = match resolve(rule, values) {
                Resolution::Resolved(value) => value,
                Resolution::Unbound => {
                    log::debug!("Input variable '{}' has no value; skipping", rule.name);
                    continue;
                }
                Resolution::MissingRequired => match self.policy {
                    RequiredPolicy::Fail => {
                        return Err(LayoutError::MissingRequiredValue {
                            rule: rule.name.clone(),
                        });
                    }
                    RequiredPolicy::Skip => {
                        let diagnostic = BindingDiagnostic::MissingRequiredValue {
                            rule: rule.name.clone(),
                        };
                        log::warn!("{}", diagnostic);
                        diagnostics.push(diagnostic);
                        continue;
                    }
                },
            };

            for target in &rule.targets {
                let diagnostic =
                    match arena.set_field(&target.element_name, &target.field_name, value.clone()) {
                        FieldWrite::Written => {
                            applied += 1;
                            log::debug!(
                                "  -> '{}' written to {}.{}",
                                rule.name,
                                target.element_name,
                                target.field_name
                            );
                            continue;
                        }
                        FieldWrite::UnknownElement => BindingDiagnostic::UnknownTarget {
                            rule: rule.name.clone(),
                            element: target.element_name.clone(),
                        },
                        FieldWrite::NameCollision(name) => BindingDiagnostic::NameCollision {
                            rule: rule.name.clone(),
                            element: target.element_name.clone(),
                            name,
                        },
                    };
                log::warn!("{}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }

        log::info!(
            "Wired layout: {} target(s) written, {} diagnostic(s)",
            applied,
            diagnostics.len()
        );
        Ok(WiringOutcome {
            layout: arena.into_tree(),
            diagnostics,
        })
    }

    /// Like [`Binder::wire`], but returns the populated layout as JSON text.
    pub fn wire_to_text<V>(&self, values: &V) -> Result<String, LayoutError>
    where
        V: ValueLookup + ?Sized,
    {
        self.wire(values)?.to_text()
    }
}

/// Wires a template (or bare layout tree) in one call and returns the populated tree.
///
/// The template value is only read. Diagnostics are logged and otherwise dropped;
/// use [`Binder::wire`] to inspect them.
pub fn wire<V>(template: &Value, values: &V) -> Result<Value, LayoutError>
where
    V: ValueLookup + ?Sized,
{
    Binder::new(template)?.wire(values).map(|outcome| outcome.layout)
}

/// Wires a template in one call and returns the populated tree as JSON text.
pub fn wire_to_text<V>(template: &Value, values: &V) -> Result<String, LayoutError>
where
    V: ValueLookup + ?Sized,
{
    Binder::new(template)?.wire_to_text(values)
}
