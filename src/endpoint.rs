use std::fmt;

const PREFIX: &str = "/v1/api-leiloes-pub/custom";

/// One remote resource of the auction API: a fixed path and the query
/// parameters it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Benchmarks,
    Comunicados,
    Portarias,
    Resultados,
    Dealers,
    Calendario,
    Homologacao,
    Troca,
}

impl Endpoint {
    pub const ALL: [Endpoint; 8] = [
        Endpoint::Benchmarks,
        Endpoint::Comunicados,
        Endpoint::Portarias,
        Endpoint::Resultados,
        Endpoint::Dealers,
        Endpoint::Calendario,
        Endpoint::Homologacao,
        Endpoint::Troca,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Benchmarks => "benchmarks",
            Endpoint::Comunicados => "comunicados",
            Endpoint::Portarias => "portarias",
            Endpoint::Resultados => "resultados",
            Endpoint::Dealers => "dealers",
            Endpoint::Calendario => "calendario",
            Endpoint::Homologacao => "homologacao",
            Endpoint::Troca => "troca",
        }
    }

    /// Path relative to the base URL, e.g. `/v1/api-leiloes-pub/custom/troca`.
    pub fn path(self) -> String {
        format!("{}/{}", PREFIX, self.name())
    }

    /// Query parameter names the server understands, spelled as on the wire.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Endpoint::Benchmarks => &["incluir_historico"],
            Endpoint::Comunicados | Endpoint::Calendario => &[],
            Endpoint::Portarias | Endpoint::Homologacao => &["data_leilao"],
            Endpoint::Resultados => &["ano", "anoinicial", "dataleilao", "titulo"],
            Endpoint::Dealers => &["ANO", "CNPJ", "DEALER"],
            // troca is the only date endpoint with an upper-case key
            Endpoint::Troca => &["DATA_LEILAO"],
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
