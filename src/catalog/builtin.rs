// Mocked dataset served until a real data pipeline exists.

use super::Catalog;
use crate::models::{
    ActivityEntry, League, MentalNuclei, NucleiOverview, Nucleus, NucleusSummary, Player, PositionStat,
    SystemStatus, TopPerformer,
};

#[allow(clippy::too_many_arguments)]
fn player(
    player_id: i64,
    name: &str,
    position: &str,
    team_name: &str,
    nationality: &str,
    age: u32,
    overall_score: f64,
    mental_nuclei: MentalNuclei,
) -> Player {
    Player {
        player_id,
        name: name.to_string(),
        position: position.to_string(),
        team_name: team_name.to_string(),
        nationality: nationality.to_string(),
        age,
        overall_score,
        mental_nuclei,
    }
}

fn performer(
    rank: u32,
    name: &str,
    position: &str,
    team: &str,
    overall_score: f64,
    nationality: &str,
) -> TopPerformer {
    TopPerformer {
        rank,
        name: name.to_string(),
        position: position.to_string(),
        team: team.to_string(),
        overall_score,
        nationality: nationality.to_string(),
    }
}

fn summary(nucleus: Nucleus, average: f64, components: &[&str]) -> (Nucleus, NucleusSummary) {
    (
        nucleus,
        NucleusSummary {
            name: nucleus.label().to_string(),
            average,
            components: components.iter().map(|c| c.to_string()).collect(),
        },
    )
}

fn players() -> Vec<Player> {
    vec![
        player(
            1,
            "Marco Rossi",
            "RB",
            "SL Benfica",
            "Italy",
            25,
            88.5,
            MentalNuclei {
                adaptation_learning: 85.2,
                attention_perception: 89.1,
                collective_integration: 82.3,
                decision_judgment: 90.5,
                energy_management: 87.8,
                initiative_risk: 91.2,
                resilience_recovery: 86.7,
                self_regulation_discipline: 95.2,
            },
        ),
        player(
            2,
            "David López",
            "DM",
            "SL Benfica",
            "Spain",
            28,
            84.8,
            MentalNuclei {
                adaptation_learning: 82.1,
                attention_perception: 88.5,
                collective_integration: 89.2,
                decision_judgment: 85.3,
                energy_management: 83.7,
                initiative_risk: 78.9,
                resilience_recovery: 87.4,
                self_regulation_discipline: 83.3,
            },
        ),
    ]
}

fn top_performers() -> Vec<TopPerformer> {
    vec![
        performer(1, "Marco Rossi", "RB", "SL Benfica", 88.5, "Italy"),
        performer(2, "David López", "DM", "SL Benfica", 84.8, "Spain"),
        performer(3, "Yuki Tanaka", "CM", "Sporting CP", 83.9, "Japan"),
        performer(4, "Gonçalo Pereira", "CB", "Sporting CP", 82.8, "Portugal"),
        performer(5, "Rafael Gomes", "AM", "Sporting CP", 81.4, "Portugal"),
    ]
}

fn nuclei() -> NucleiOverview {
    const RECEPTION: &str = "Controlled Reception Rate";
    const BOUNCE_BACK: &str = "Error Bounce Back";
    const LATENCY: &str = "Decision Latency";
    const CHOICE: &str = "Choice Accuracy";

    NucleiOverview::from([
        summary(Nucleus::AdaptationLearning, 77.7, &[BOUNCE_BACK, CHOICE, RECEPTION]),
        summary(
            Nucleus::AttentionPerception,
            80.6,
            &[RECEPTION, "Under Pressure Control", LATENCY],
        ),
        summary(Nucleus::CollectiveIntegration, 67.7, &["Press Synchrony"]),
        summary(Nucleus::DecisionJudgment, 67.5, &[CHOICE, "Threat Added"]),
        summary(Nucleus::EnergyManagement, 81.9, &[RECEPTION, BOUNCE_BACK, LATENCY]),
        summary(Nucleus::InitiativeRisk, 70.1, &["Dribble Success"]),
        summary(Nucleus::ResilienceRecovery, 83.2, &["Recovery Speed", BOUNCE_BACK]),
        summary(Nucleus::SelfRegulationDiscipline, 79.9, &["Fouls per 90", BOUNCE_BACK]),
    ])
}

fn position_stats() -> Vec<PositionStat> {
    [("RB", 1, 88.5), ("DM", 1, 84.8), ("CM", 1, 83.9), ("CB", 1, 82.8), ("AM", 1, 81.4)]
        .into_iter()
        .map(|(position, players, average_score)| PositionStat {
            position: position.to_string(),
            players,
            average_score,
        })
        .collect()
}

fn recent_activity() -> Vec<ActivityEntry> {
    [
        ("Data loaded successfully", "2 minutes ago"),
        ("Metrics calculated", "5 minutes ago"),
        ("System initialized", "10 minutes ago"),
    ]
    .into_iter()
    .map(|(action, timestamp)| ActivityEntry {
        action: action.to_string(),
        timestamp: timestamp.to_string(),
    })
    .collect()
}

impl Catalog {
    /// The dataset compiled into the binary
    pub fn builtin() -> Self {
        Catalog {
            players: players(),
            top_performers: top_performers(),
            nuclei: nuclei(),
            system_status: SystemStatus {
                total_players: 486,
                mental_metrics: 10,
                status: "Active".to_string(),
                last_update: "Now".to_string(),
            },
            position_stats: position_stats(),
            recent_activity: recent_activity(),
            leagues: vec![League {
                id: 1,
                name: "Liga Portugal".to_string(),
            }],
        }
    }
}
