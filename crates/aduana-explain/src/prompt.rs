//! Prompt construction for a remote explanation model.
//!
//! The service can delegate commentary to a language model; this module
//! builds the instruction text that request would carry. Building the
//! prompt is deterministic and local; issuing the call is someone else's
//! job.

use aduana_engine::ComplianceReport;

/// Assemble the instruction text for one validated invoice.
pub fn build_prompt(file_name: &str, report: &ComplianceReport) -> String {
    let detail = report
        .rules
        .iter()
        .map(|r| format!("- {} => {}: {}", r.name, r.status, r.message))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Eres un experto en comercio exterior y validación de facturas de importación \
para Colombia.\n\
Te paso el resultado de la validación automática de una factura.\n\
\n\
Nombre del archivo: {file_name}\n\
\n\
Resumen:\n\
- Estado global: {overall}\n\
- Total requisitos: {total}\n\
- OK: {ok}\n\
- PARCIAL: {partial}\n\
- ERROR: {error}\n\
\n\
Detalle por requisito:\n\
{detail}\n\
\n\
Por favor, responde en español claro y en máximo 3 bloques:\n\
\n\
1. Resumen general (¿la factura cumple, cumple parcialmente o no cumple?).\n\
2. Lista de los problemas más críticos (los que tienen estado ERROR) explicando \
por qué son graves.\n\
3. Recomendaciones concretas para corregir la factura o qué información debería \
pedirle al proveedor.\n\
\n\
No repitas el JSON, solo interpreta y explica para un usuario de negocio \
(operador de embarques).",
        overall = report.overall_status,
        total = report.total,
        ok = report.ok,
        partial = report.partial,
        error = report.error,
    )
}
