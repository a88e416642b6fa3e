//! Static procedure and view catalog
//!
//! The catalog is the single source of truth for the UI: one form per
//! procedure descriptor, one browser per view name, generated in the order
//! listed here. Descriptors are immutable compile-time data.

/// Category a declared parameter type falls into.
///
/// Only the `int` prefix is semantically recognized; everything else
/// (varchar, date, ...) is passed through as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    Integer,
    Text,
}

impl ParamType {
    /// Total mapping from a raw declared-type string to a category.
    /// `int`, `INT`, `integer`, `int(11)` all map to `Integer`;
    /// unrecognized strings default to `Text`.
    pub fn from_declared(declared: &str) -> Self {
        let prefix = declared.as_bytes().get(..3);
        match prefix {
            Some(p) if p.eq_ignore_ascii_case(b"int") => ParamType::Integer,
            _ => ParamType::Text,
        }
    }
}

/// One named, typed parameter of a stored procedure.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    pub name: &'static str,
    pub declared_type: &'static str,
}

impl ParamSpec {
    pub fn param_type(&self) -> ParamType {
        ParamType::from_declared(self.declared_type)
    }
}

/// Descriptor for one stored procedure: its name and ordered parameter list.
#[derive(Clone, Copy, Debug)]
pub struct ProcedureDescriptor {
    pub name: &'static str,
    pub params: &'static [ParamSpec],
}

const fn p(name: &'static str, declared_type: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        declared_type,
    }
}

/// All callable procedures, in tab order.
pub const PROCEDURES: &[ProcedureDescriptor] = &[
    ProcedureDescriptor {
        name: "add_owner",
        params: &[
            p("ip_username", "varchar(40)"),
            p("ip_first_name", "varchar(100)"),
            p("ip_last_name", "varchar(100)"),
            p("ip_address", "varchar(500)"),
            p("ip_birthdate", "date"),
        ],
    },
    ProcedureDescriptor {
        name: "add_employee",
        params: &[
            p("ip_username", "varchar(40)"),
            p("ip_first_name", "varchar(100)"),
            p("ip_last_name", "varchar(100)"),
            p("ip_address", "varchar(500)"),
            p("ip_birthdate", "date"),
            p("ip_taxID", "varchar(40)"),
            p("ip_hired", "date"),
            p("ip_employee_experience", "int"),
            p("ip_salary", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "add_driver_role",
        params: &[
            p("ip_username", "varchar(40)"),
            p("ip_licenseID", "varchar(40)"),
            p("ip_license_type", "varchar(40)"),
            p("ip_driver_experience", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "add_worker_role",
        params: &[p("ip_username", "varchar(40)")],
    },
    ProcedureDescriptor {
        name: "add_product",
        params: &[
            p("ip_barcode", "varchar(40)"),
            p("ip_name", "varchar(100)"),
            p("ip_weight", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "add_van",
        params: &[
            p("ip_id", "varchar(40)"),
            p("ip_tag", "int"),
            p("ip_fuel", "int"),
            p("ip_capacity", "int"),
            p("ip_sales", "int"),
            p("ip_driven_by", "varchar(40)"),
        ],
    },
    ProcedureDescriptor {
        name: "add_business",
        params: &[
            p("ip_long_name", "varchar(40)"),
            p("ip_rating", "int"),
            p("ip_spent", "int"),
            p("ip_location", "varchar(40)"),
        ],
    },
    ProcedureDescriptor {
        name: "add_service",
        params: &[
            p("ip_id", "varchar(40)"),
            p("ip_long_name", "varchar(100)"),
            p("ip_home_base", "varchar(40)"),
            p("ip_manager", "varchar(40)"),
        ],
    },
    ProcedureDescriptor {
        name: "add_location",
        params: &[
            p("ip_label", "varchar(40)"),
            p("ip_x_coord", "int"),
            p("ip_y_coord", "int"),
            p("ip_space", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "start_funding",
        params: &[
            p("ip_owner", "varchar(40)"),
            p("ip_amount", "int"),
            p("ip_long_name", "varchar(40)"),
            p("ip_fund_date", "date"),
        ],
    },
    ProcedureDescriptor {
        name: "hire_employee",
        params: &[p("ip_username", "varchar(40)"), p("ip_id", "varchar(40)")],
    },
    ProcedureDescriptor {
        name: "fire_employee",
        params: &[p("ip_username", "varchar(40)"), p("ip_id", "varchar(40)")],
    },
    ProcedureDescriptor {
        name: "manage_service",
        params: &[p("ip_username", "varchar(40)"), p("ip_id", "varchar(40)")],
    },
    ProcedureDescriptor {
        name: "takeover_van",
        params: &[
            p("ip_username", "varchar(40)"),
            p("ip_id", "varchar(40)"),
            p("ip_tag", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "load_van",
        params: &[
            p("ip_id", "varchar(40)"),
            p("ip_tag", "int"),
            p("ip_barcode", "varchar(40)"),
            p("ip_more_packages", "int"),
            p("ip_price", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "refuel_van",
        params: &[
            p("ip_id", "varchar(40)"),
            p("ip_tag", "int"),
            p("ip_more_fuel", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "drive_van",
        params: &[
            p("ip_id", "varchar(40)"),
            p("ip_tag", "int"),
            p("ip_destination", "varchar(40)"),
        ],
    },
    ProcedureDescriptor {
        name: "purchase_product",
        params: &[
            p("ip_long_name", "varchar(40)"),
            p("ip_id", "varchar(40)"),
            p("ip_tag", "int"),
            p("ip_barcode", "varchar(40)"),
            p("ip_quantity", "int"),
        ],
    },
    ProcedureDescriptor {
        name: "remove_product",
        params: &[p("ip_barcode", "varchar(40)")],
    },
    ProcedureDescriptor {
        name: "remove_van",
        params: &[p("ip_id", "varchar(40)"), p("ip_tag", "int")],
    },
    ProcedureDescriptor {
        name: "remove_driver_role",
        params: &[p("ip_username", "varchar(40)")],
    },
];

/// All browsable views, in tab order (after the procedure tabs).
pub const VIEWS: &[&str] = &[
    "display_owner_view",
    "display_employee_view",
    "display_driver_view",
    "display_location_view",
    "display_product_view",
    "display_service_view",
];
