/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when following a formula through the passes, or a refutation through its rounds.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [passes](crate::transform) before collapse
    pub const TRANSFORM: &str = "transform";

    /// Logs related to [collapse](crate::transform::collapse)
    pub const COLLAPSE: &str = "collapse";

    /// Logs related to building a [clause set](crate::structures::clause_set)
    pub const CLAUSE_SET: &str = "clause_set";

    /// Logs related to [derivations](crate::structures::derivation) of resolvents
    pub const DERIVATION: &str = "derivation";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [scans](crate::procedures::scan) of pairs of clauses
    pub const SCAN: &str = "scan";
}
