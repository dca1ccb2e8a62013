use serde::Serialize;
use std::fmt;

/// The closed issue codes this core can emit. The surrounding system has a
/// wider vocabulary for agent and parameter concerns; these are the
/// structural ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationIssueCode {
    InvalidFlowStructure,
    IfNodeMissingBranches,
    IfNodeBranchNotReachingEnd,
}

impl ValidationIssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationIssueCode::InvalidFlowStructure => "INVALID_FLOW_STRUCTURE",
            ValidationIssueCode::IfNodeMissingBranches => "IF_NODE_MISSING_BRANCHES",
            ValidationIssueCode::IfNodeBranchNotReachingEnd => "IF_NODE_BRANCH_NOT_REACHING_END",
        }
    }

    /// Lowercase form used as the leading segment of issue ids.
    fn id_prefix(self) -> &'static str {
        match self {
            ValidationIssueCode::InvalidFlowStructure => "invalid_flow_structure",
            ValidationIssueCode::IfNodeMissingBranches => "if_node_missing_branches",
            ValidationIssueCode::IfNodeBranchNotReachingEnd => "if_node_branch_not_reaching_end",
        }
    }
}

impl fmt::Display for ValidationIssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl ValidationSeverity {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationSeverity::Error => "error",
            ValidationSeverity::Warning => "warning",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-facing structural defect.
///
/// Issues are produced fresh on every validation pass and never mutated;
/// the full list replaces the previous one. The `id` is deterministic for a
/// given defect so the editor's issue list can key on it without flicker
/// across recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub id: String,
    pub code: ValidationIssueCode,
    pub severity: ValidationSeverity,
    pub title: String,
    pub description: String,
    pub suggestion: String,
    #[serde(rename = "agentId", skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(rename = "agentName", skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ValidationIssue {
    /// Derives the stable id for a `(code, discriminator)` pair.
    pub fn deterministic_id(code: ValidationIssueCode, discriminator: &str) -> String {
        format!("{}.{}", code.id_prefix(), discriminator)
    }

    fn new(
        code: ValidationIssueCode,
        severity: ValidationSeverity,
        discriminator: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            id: Self::deterministic_id(code, discriminator),
            code,
            severity,
            title: title.into(),
            description: description.into(),
            suggestion: suggestion.into(),
            agent_id: None,
            agent_name: None,
            metadata: None,
        }
    }

    pub fn error(
        code: ValidationIssueCode,
        discriminator: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(
            code,
            ValidationSeverity::Error,
            discriminator,
            title,
            description,
            suggestion,
        )
    }

    pub fn warning(
        code: ValidationIssueCode,
        discriminator: &str,
        title: impl Into<String>,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::new(
            code,
            ValidationSeverity::Warning,
            discriminator,
            title,
            description,
            suggestion,
        )
    }

    /// Attributes the issue to a specific agent node.
    pub fn with_agent(mut self, agent_id: impl Into<String>, agent_name: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self.agent_name = Some(agent_name.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} - {}",
            self.severity, self.code, self.title, self.description
        )
    }
}
