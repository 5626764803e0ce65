/// Constants used by matrix building defaults and taxonomy ordering.
pub mod matrix {
    /// Default minimum all-category frequency for a keyword to survive
    /// filtering (1 keeps every keyword with at least one occurrence).
    pub const DEFAULT_MIN_TOTAL_FREQUENCY: u64 = 1;
    /// Canonical display order of the Bloom taxonomy levels.
    pub const BLOOM_LEVELS: [&str; 6] = ["BT1", "BT2", "BT3", "BT4", "BT5", "BT6"];
}

/// Constants used by verb highlighting.
pub mod highlight {
    /// Default prefix length for inflection matching.
    ///
    /// Four characters is tuned for Portuguese verb morphology (for example
    /// `iden` catches `identificou` and `identificando`); callers targeting
    /// other languages should pick their own length.
    pub const DEFAULT_PREFIX_LEN: usize = 4;
}

/// Constants used by keyword context trees.
pub mod wordtree {
    /// Maximum depth of a context branch on either side of the keyword.
    pub const MAX_CONTEXT_DEPTH: usize = 6;
}

/// Constants used by term-frequency summaries.
pub mod terms {
    /// Portuguese stopwords excluded from term-frequency summaries.
    ///
    /// The list matches the word-cloud filter of the source dashboards:
    /// articles, pronouns, contractions, and common function words.
    pub const PORTUGUESE_STOPWORDS: [&str; 140] = [
        "a", "ainda", "alguém", "algum", "alguma", "algumas", "alguns", "aos", "aquela",
        "aquelas", "aqueles", "aqui", "as", "com", "como", "contra", "da", "das", "de",
        "delas", "dele", "deles", "demais", "depois", "desde", "desta", "deste", "disso",
        "do", "dos", "e", "ela", "elas", "ele", "eles", "em", "então", "entre", "era",
        "essa", "essas", "esses", "esta", "está", "estão", "este", "estes", "estive",
        "estivemos", "estou", "eu", "isso", "isto", "mais", "mas", "menos", "mim", "na",
        "naquele", "naqueles", "nas", "nela", "neles", "nem", "no", "nos", "nossa",
        "nossas", "nosso", "nossos", "não", "nós", "o", "os", "ou", "para", "pela",
        "pelas", "pelo", "pelos", "perante", "por", "porém", "quando", "quanto", "que",
        "quem", "se", "seja", "sem", "sendo", "seu", "seus", "sob", "sobre",
        "sua", "suas", "são", "só", "tanta", "tantas", "tanto", "tantos", "te", "tem",
        "temos", "tendo", "teu", "teus", "ti", "toda", "todas", "todo", "todos", "tua",
        "tuas", "tudo", "tão", "um", "uma", "umas", "uns", "vai", "vamos", "você",
        "vocês", "à", "às", "é", "foi", "foram", "ser", "ter", "há", "já", "lhe",
        "lhes", "me", "meu", "minha",
    ];
}
