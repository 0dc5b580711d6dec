//! The fixed checklist evaluated against every import invoice.
//!
//! Each entry is a declarative record: identifier, requirement label, and a
//! classification policy over one or more signal extractors. The evaluator
//! iterates this table uniformly; adding a requirement means adding a row
//! here, not touching control flow.

use crate::document::NormalizedInvoice;

/// Where a rule reads a signal from.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Signal {
    /// A document-level field.
    Field(&'static str),
    /// An attribute of the first line item.
    Item(&'static str),
    /// First present attribute of the first line item.
    ItemAny(&'static [&'static str]),
    /// Document-level field, falling back to the first line item.
    FieldOrItem(&'static str, &'static str),
}

impl Signal {
    pub(crate) fn resolve(&self, invoice: &NormalizedInvoice) -> Option<String> {
        match *self {
            Signal::Field(name) => invoice.field(name),
            Signal::Item(attr) => invoice.first_item_attr(attr),
            Signal::ItemAny(attrs) => attrs.iter().find_map(|attr| invoice.first_item_attr(attr)),
            Signal::FieldOrItem(name, attr) => {
                invoice.field(name).or_else(|| invoice.first_item_attr(attr))
            }
        }
    }
}

/// Classification policy of one checklist entry.
pub(crate) enum Check {
    /// OK when the signal is present, ERROR otherwise.
    Single {
        signal: Signal,
        found: fn(&str) -> String,
        missing: &'static str,
    },
    /// OK when both signals are present, PARTIAL when exactly one is,
    /// ERROR when neither. Any single signal upgrades ERROR to PARTIAL,
    /// but only both reach OK.
    Dual {
        first: Signal,
        second: Signal,
        found: fn(Option<&str>, Option<&str>) -> String,
        missing: &'static str,
    },
    /// Ordered alternatives; the first present one resolves the rule.
    /// OK/ERROR only.
    FirstOf {
        signals: &'static [Signal],
        found: fn(&str) -> String,
        missing: &'static str,
    },
}

pub(crate) struct ChecklistRule {
    pub id: u32,
    pub name: &'static str,
    pub check: Check,
}

/// The import-invoice checklist, in report order.
pub(crate) static CHECKLIST: &[ChecklistRule] = &[
    ChecklistRule {
        id: 1,
        name: "Número de factura",
        check: Check::Single {
            signal: Signal::Field("InvoiceNumber"),
            found: |v| format!("Número de factura: {}.", v),
            missing: "La factura no tiene número (InvoiceNumber).",
        },
    },
    ChecklistRule {
        id: 2,
        name: "Fecha de emisión",
        check: Check::Single {
            signal: Signal::Field("InvoiceDate"),
            found: |v| format!("Fecha de emisión: {}.", v),
            missing: "La factura no tiene fecha de emisión (InvoiceDate).",
        },
    },
    ChecklistRule {
        id: 3,
        name: "Lugar de emisión",
        check: Check::FirstOf {
            signals: &[
                Signal::Field("OriginCountryAddress"),
                Signal::Field("CountryOfOrigin"),
                Signal::Field("PortOfLoading"),
            ],
            found: |v| format!("Lugar de emisión/origen: {}.", v),
            missing: "No se encuentra un lugar de emisión u origen \
                      (CountryOfOrigin / OriginCountryAddress / PortOfLoading).",
        },
    },
    ChecklistRule {
        id: 4,
        name: "Datos del vendedor",
        check: Check::Dual {
            first: Signal::Field("Supplier"),
            second: Signal::Field("SupplierAddress"),
            found: |supplier, address| {
                format!(
                    "Vendedor: {} / Dirección: {}.",
                    supplier.unwrap_or("sin nombre"),
                    address.unwrap_or("sin dirección")
                )
            },
            missing: "No hay datos del vendedor (Supplier / SupplierAddress).",
        },
    },
    ChecklistRule {
        id: 5,
        name: "Datos del comprador",
        check: Check::Dual {
            first: Signal::Field("Customer"),
            second: Signal::Field("CustomerAddress"),
            found: |customer, address| {
                format!(
                    "Comprador: {} / Dirección: {}.",
                    customer.unwrap_or("sin nombre"),
                    address.unwrap_or("sin dirección")
                )
            },
            missing: "No hay datos del comprador (Customer / CustomerAddress).",
        },
    },
    ChecklistRule {
        id: 6,
        name: "Descripción de mercancías",
        check: Check::Single {
            signal: Signal::Item("Description"),
            found: |_| "La tabla incluye descripciones de mercancía (Description).".to_string(),
            missing: "No hay descripción de mercancías en la tabla (Description).",
        },
    },
    ChecklistRule {
        id: 7,
        name: "Cantidades",
        check: Check::Single {
            signal: Signal::Item("Quantity"),
            found: |_| "La tabla incluye cantidades (Quantity).".to_string(),
            missing: "No hay cantidades en la tabla (Quantity).",
        },
    },
    ChecklistRule {
        id: 8,
        name: "Valores unitarios y totales",
        check: Check::Dual {
            first: Signal::ItemAny(&["UnitPrice", "NetValuePerItem"]),
            second: Signal::Field("TotalInvoiceValue"),
            found: |_, _| {
                "La factura tiene algunos valores de precios y totales \
                 (UnitPrice / NetValuePerItem / TotalInvoiceValue)."
                    .to_string()
            },
            missing: "No se encuentran valores unitarios ni totales claros.",
        },
    },
    ChecklistRule {
        id: 9,
        name: "Moneda",
        check: Check::Single {
            signal: Signal::FieldOrItem("Currency", "Currency"),
            found: |v| format!("Moneda: {}.", v),
            missing: "No se encuentra la moneda (Currency).",
        },
    },
    ChecklistRule {
        id: 10,
        name: "Incoterm",
        check: Check::Single {
            signal: Signal::Field("Incoterm"),
            found: |v| format!("Incoterm: {}.", v),
            missing: "Falta el incoterm (Incoterm).",
        },
    },
    ChecklistRule {
        id: 11,
        name: "Forma de pago",
        check: Check::Single {
            signal: Signal::Field("PaymentTerms"),
            found: |v| format!("Condiciones de pago: {}.", v),
            missing: "No se encuentra la forma de pago (PaymentTerms).",
        },
    },
];
