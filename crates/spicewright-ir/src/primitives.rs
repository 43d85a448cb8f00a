//! Primitive device registry.
//!
//! The kind→spec table below is the single source of truth for positional
//! semantics: canonical port order, element letter, and which generic
//! parameter keys carry the positional value and the device model name.

/// Canonical primitive device types.
///
/// This is a closed set; the string names match the `model` field used for
/// primitive components in cell files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// N-channel MOSFET.
    Nmos,
    /// P-channel MOSFET.
    Pmos,
    /// NPN bipolar transistor.
    Npn,
    /// PNP bipolar transistor.
    Pnp,
    /// Resistor.
    Resistor,
    /// Capacitor.
    Capacitor,
    /// Inductor.
    Inductor,
    /// Independent voltage source.
    Vsource,
    /// Independent current source.
    Isource,
    /// Diode.
    Diode,
}

/// How to emit an element line for a given primitive kind.
///
/// `port_order` fixes the canonical positional order of nets.
/// `value_param` names the generic parameter that becomes the positional
/// value field (passives and sources); `model_param` names the one that
/// carries the device model card name (transistors and diodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveSpec {
    /// Canonical port names in SPICE positional order.
    pub port_order: &'static [&'static str],
    /// SPICE element prefix letter.
    pub element_letter: char,
    /// Parameter key holding the positional value, if any.
    pub value_param: Option<&'static str>,
    /// Parameter key holding the device model name, if any.
    pub model_param: Option<&'static str>,
}

static MOSFET: PrimitiveSpec = PrimitiveSpec {
    port_order: &["D", "G", "S", "B"],
    element_letter: 'M',
    value_param: None,
    model_param: Some("model_name"),
};

static BIPOLAR: PrimitiveSpec = PrimitiveSpec {
    port_order: &["C", "B", "E"],
    element_letter: 'Q',
    value_param: None,
    model_param: Some("model_name"),
};

static RESISTOR: PrimitiveSpec = PrimitiveSpec {
    port_order: &["P", "N"],
    element_letter: 'R',
    value_param: Some("value"),
    model_param: None,
};

static CAPACITOR: PrimitiveSpec = PrimitiveSpec {
    port_order: &["P", "N"],
    element_letter: 'C',
    value_param: Some("value"),
    model_param: None,
};

static INDUCTOR: PrimitiveSpec = PrimitiveSpec {
    port_order: &["P", "N"],
    element_letter: 'L',
    value_param: Some("value"),
    model_param: None,
};

static VSOURCE: PrimitiveSpec = PrimitiveSpec {
    port_order: &["P", "N"],
    element_letter: 'V',
    value_param: Some("value"),
    model_param: None,
};

static ISOURCE: PrimitiveSpec = PrimitiveSpec {
    port_order: &["P", "N"],
    element_letter: 'I',
    value_param: Some("value"),
    model_param: None,
};

static DIODE: PrimitiveSpec = PrimitiveSpec {
    port_order: &["A", "K"],
    element_letter: 'D',
    value_param: None,
    model_param: Some("model_name"),
};

impl PrimitiveKind {
    /// Every primitive kind, in registry order.
    pub const ALL: [PrimitiveKind; 10] = [
        PrimitiveKind::Nmos,
        PrimitiveKind::Pmos,
        PrimitiveKind::Npn,
        PrimitiveKind::Pnp,
        PrimitiveKind::Resistor,
        PrimitiveKind::Capacitor,
        PrimitiveKind::Inductor,
        PrimitiveKind::Vsource,
        PrimitiveKind::Isource,
        PrimitiveKind::Diode,
    ];

    /// Look up the emission spec for this kind.
    pub fn spec(self) -> &'static PrimitiveSpec {
        match self {
            PrimitiveKind::Nmos | PrimitiveKind::Pmos => &MOSFET,
            PrimitiveKind::Npn | PrimitiveKind::Pnp => &BIPOLAR,
            PrimitiveKind::Resistor => &RESISTOR,
            PrimitiveKind::Capacitor => &CAPACITOR,
            PrimitiveKind::Inductor => &INDUCTOR,
            PrimitiveKind::Vsource => &VSOURCE,
            PrimitiveKind::Isource => &ISOURCE,
            PrimitiveKind::Diode => &DIODE,
        }
    }

    /// The cell-file model name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Nmos => "nmos",
            PrimitiveKind::Pmos => "pmos",
            PrimitiveKind::Npn => "npn",
            PrimitiveKind::Pnp => "pnp",
            PrimitiveKind::Resistor => "r",
            PrimitiveKind::Capacitor => "c",
            PrimitiveKind::Inductor => "l",
            PrimitiveKind::Vsource => "vsrc",
            PrimitiveKind::Isource => "isrc",
            PrimitiveKind::Diode => "diode",
        }
    }

    /// Parse a cell-file model name into a kind.
    pub fn parse(name: &str) -> Option<PrimitiveKind> {
        match name {
            "nmos" => Some(PrimitiveKind::Nmos),
            "pmos" => Some(PrimitiveKind::Pmos),
            "npn" => Some(PrimitiveKind::Npn),
            "pnp" => Some(PrimitiveKind::Pnp),
            "r" => Some(PrimitiveKind::Resistor),
            "c" => Some(PrimitiveKind::Capacitor),
            "l" => Some(PrimitiveKind::Inductor),
            "vsrc" => Some(PrimitiveKind::Vsource),
            "isrc" => Some(PrimitiveKind::Isource),
            "diode" => Some(PrimitiveKind::Diode),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
