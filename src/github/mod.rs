// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Namespace for the GitHub GraphQL integration (transport seam and report queries)
// role: github/namespace
// outputs: Public submodules for the API client and the two report queries
// invariants: All GitHub traffic goes through the GithubGraphql seam; failures abort the run
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod api;
pub mod queries;
