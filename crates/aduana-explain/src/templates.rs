//! Explanation templates.
//!
//! Commentary is rendered from Handlebars templates. A built-in template
//! ships with the crate; deployments can override it with a YAML file
//! mapping template names to bodies.

use serde::Deserialize;
use std::collections::HashMap;

use crate::ExplainError;

/// Name of the template the agent renders.
pub const EXPLANATION_TEMPLATE: &str = "explanation";

/// Top-level templates file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

/// The commentary rendered when no override file is configured. Data comes
/// precomputed from the agent (error/partial rule lists, joined names), so
/// the template needs only the built-in block helpers.
const BUILTIN_EXPLANATION: &str = "\
1. Resumen general: la factura \"{{file_name}}\" obtuvo el estado \
\"{{overall_status}}\" ({{ok}} OK, {{partial}} PARCIAL, {{error}} ERROR de \
{{total}} requisitos). {{summary}}

2. Problemas críticos:
{{#if errors}}{{#each errors}}- {{this.name}}: {{this.message}}
{{/each}}{{else}}- Ninguno: no hay requisitos con estado ERROR.
{{/if}}
3. Recomendaciones:
{{#if errors}}- Solicite al proveedor la información marcada con ERROR antes \
de presentar la factura.
{{/if}}{{#if partials}}- Complete los datos parciales: {{partial_names}}.
{{/if}}{{#unless errors}}{{#unless partials}}- La factura puede presentarse \
sin correcciones.
{{/unless}}{{/unless}}";

impl TemplatesFile {
    /// The built-in template set.
    pub fn builtin() -> Self {
        let mut templates = HashMap::new();
        templates.insert(
            EXPLANATION_TEMPLATE.to_string(),
            Template {
                description: "Comentario de cumplimiento para el operador".to_string(),
                template: BUILTIN_EXPLANATION.to_string(),
            },
        );
        Self {
            version: "1.0".to_string(),
            templates,
        }
    }

    /// Parse templates from YAML content.
    pub fn from_yaml(yaml: &str) -> Result<Self, ExplainError> {
        serde_yaml::from_str(yaml).map_err(|e| ExplainError::Template(e.to_string()))
    }

    /// Load templates from a YAML file.
    pub fn load(path: &str) -> Result<Self, ExplainError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ExplainError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Get a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// List all template names.
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.keys().map(|s| s.as_str()).collect()
    }
}
