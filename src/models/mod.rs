use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The eight mental-performance categories a player is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nucleus {
    AdaptationLearning,
    AttentionPerception,
    CollectiveIntegration,
    DecisionJudgment,
    EnergyManagement,
    InitiativeRisk,
    ResilienceRecovery,
    SelfRegulationDiscipline,
}

impl Nucleus {
    pub const ALL: [Nucleus; 8] = [
        Nucleus::AdaptationLearning,
        Nucleus::AttentionPerception,
        Nucleus::CollectiveIntegration,
        Nucleus::DecisionJudgment,
        Nucleus::EnergyManagement,
        Nucleus::InitiativeRisk,
        Nucleus::ResilienceRecovery,
        Nucleus::SelfRegulationDiscipline,
    ];

    /// Display label used by the dashboard
    pub fn label(self) -> &'static str {
        match self {
            Nucleus::AdaptationLearning => "Adaptation & Learning",
            Nucleus::AttentionPerception => "Attention & Perception",
            Nucleus::CollectiveIntegration => "Collective Integration",
            Nucleus::DecisionJudgment => "Decision & Judgment",
            Nucleus::EnergyManagement => "Energy Management",
            Nucleus::InitiativeRisk => "Initiative & Risk",
            Nucleus::ResilienceRecovery => "Resilience & Recovery",
            Nucleus::SelfRegulationDiscipline => "Self-Regulation & Discipline",
        }
    }
}

/// Per-category scores for one player. One field per nucleus, so the key set
/// on the wire is always the full fixed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalNuclei {
    pub adaptation_learning: f64,
    pub attention_perception: f64,
    pub collective_integration: f64,
    pub decision_judgment: f64,
    pub energy_management: f64,
    pub initiative_risk: f64,
    pub resilience_recovery: f64,
    pub self_regulation_discipline: f64,
}

impl MentalNuclei {
    pub fn get(&self, nucleus: Nucleus) -> f64 {
        match nucleus {
            Nucleus::AdaptationLearning => self.adaptation_learning,
            Nucleus::AttentionPerception => self.attention_perception,
            Nucleus::CollectiveIntegration => self.collective_integration,
            Nucleus::DecisionJudgment => self.decision_judgment,
            Nucleus::EnergyManagement => self.energy_management,
            Nucleus::InitiativeRisk => self.initiative_risk,
            Nucleus::ResilienceRecovery => self.resilience_recovery,
            Nucleus::SelfRegulationDiscipline => self.self_regulation_discipline,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nucleus, f64)> + '_ {
        Nucleus::ALL.into_iter().map(|n| (n, self.get(n)))
    }
}

/// Player profile with scored metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: i64,
    pub name: String,
    pub position: String,
    pub team_name: String,
    pub nationality: String,
    pub age: u32,
    pub overall_score: f64,
    pub mental_nuclei: MentalNuclei,
}

/// Response wrapper for the player listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
    pub total: usize,
}

/// Aggregate view of one nucleus across the whole player base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NucleusSummary {
    pub name: String,
    pub average: f64,
    pub components: Vec<String>,
}

pub type NucleiOverview = BTreeMap<Nucleus, NucleusSummary>;

#[derive(Debug, Serialize, Deserialize)]
pub struct MentalNucleiResponse {
    pub mental_nuclei: NucleiOverview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub rank: u32,
    pub name: String,
    pub position: String,
    pub team: String,
    pub overall_score: f64,
    pub nationality: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopPerformersResponse {
    pub top_performers: Vec<TopPerformer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub total_players: u32,
    pub mental_metrics: u32,
    pub status: String,
    pub last_update: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionStat {
    pub position: String,
    pub players: u32,
    pub average_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub timestamp: String,
}

/// Everything the dashboard landing page renders in one call
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub system_status: SystemStatus,
    pub mental_nuclei_overview: NucleiOverview,
    pub top_performers: Vec<TopPerformer>,
    pub position_stats: Vec<PositionStat>,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PositionsResponse {
    pub positions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaguesResponse {
    pub leagues: Vec<League>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PositionAverage {
    pub overall_score: f64,
}

/// How one position group stacks up, with its players best first
#[derive(Debug, Serialize, Deserialize)]
pub struct PositionComparisonResponse {
    pub position: String,
    pub total_players: u32,
    pub position_average: PositionAverage,
    pub players: Vec<Player>,
}
