/// Scale applied to the spin matrices before they are embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpinNormalization {
    /// Plain spin matrices `S_x, S_y, S_z` (spin-1/2 gives `σ/2`).
    #[default]
    Physical,
    /// Doubled spin matrices `2 S_a`, so spin-1/2 maps onto the bare Pauli matrices.
    Pauli,
}

impl SpinNormalization {
    pub fn factor(&self) -> f64 {
        match self {
            SpinNormalization::Physical => 1.0,
            SpinNormalization::Pauli => 2.0,
        }
    }
}

/// Mapper configuration.
///
/// `padding` fills the diagonal of the unused block created by embedding and
/// `embed_upper` selects whether the spin matrix occupies the upper-left
/// (`true`) or lower-right (`false`) block:
///
/// ```text
/// embed_upper = true        embed_upper = false
/// | M  0           |        | padding*I  0 |
/// | 0  padding*I   |        | 0          M |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapperConfig {
    pub padding: f64,
    pub embed_upper: bool,
    pub normalization: SpinNormalization,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            padding: 1.0,
            embed_upper: true,
            normalization: SpinNormalization::Physical,
        }
    }
}

impl MapperConfig {
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_embed_upper(mut self, embed_upper: bool) -> Self {
        self.embed_upper = embed_upper;
        self
    }

    pub fn with_normalization(mut self, normalization: SpinNormalization) -> Self {
        self.normalization = normalization;
        self
    }
}
