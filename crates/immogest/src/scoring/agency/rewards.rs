use super::domain::{AgencyReward, RewardKind};

/// Rewards stay redeemable for six months after the campaign closes. The
/// caller resolves this to an absolute date via [`AgencyReward::valid_until`].
pub const REWARD_VALIDITY_MONTHS: u32 = 6;

/// Composite score from which the quality badge is granted, rank aside.
pub const QUALITY_BADGE_THRESHOLD: f64 = 85.0;

/// Rank- and score-based reward grants for a ranked agency.
///
/// Ranks beyond the podium earn no rank-based rewards; the quality badge is
/// independent of rank.
pub fn assign_rewards(rank: u32, score: f64) -> Vec<AgencyReward> {
    let mut rewards = Vec::new();

    match rank {
        1 => {
            rewards.push(cash_bonus(
                "Grand prix du classement",
                "Prime versée à la première agence du semestre.",
                1_000_000.0,
            ));
            rewards.push(discount(
                "Abonnement offert",
                "Réduction de 100% sur l'abonnement pendant les 6 prochains mois.",
                100.0,
            ));
        }
        2 => {
            rewards.push(cash_bonus(
                "Prime du deuxième rang",
                "Prime versée à la deuxième agence du semestre.",
                600_000.0,
            ));
            rewards.push(discount(
                "Réduction d'abonnement",
                "Réduction de 75% sur l'abonnement pendant les 6 prochains mois.",
                75.0,
            ));
        }
        3 => {
            rewards.push(cash_bonus(
                "Prime du troisième rang",
                "Prime versée à la troisième agence du semestre.",
                300_000.0,
            ));
            rewards.push(discount(
                "Réduction d'abonnement",
                "Réduction de 50% sur l'abonnement pendant les 6 prochains mois.",
                50.0,
            ));
        }
        _ => {}
    }

    if score >= QUALITY_BADGE_THRESHOLD {
        rewards.push(AgencyReward {
            kind: RewardKind::QualityBadge,
            title: "Badge qualité".to_string(),
            description: "Label décerné aux agences dépassant 85 points.".to_string(),
            value: 0.0,
            valid_months: REWARD_VALIDITY_MONTHS,
        });
    }

    rewards
}

fn cash_bonus(title: &str, description: &str, amount: f64) -> AgencyReward {
    AgencyReward {
        kind: RewardKind::CashBonus,
        title: title.to_string(),
        description: description.to_string(),
        value: amount,
        valid_months: REWARD_VALIDITY_MONTHS,
    }
}

fn discount(title: &str, description: &str, percent: f64) -> AgencyReward {
    AgencyReward {
        kind: RewardKind::DiscountPercent,
        title: title.to_string(),
        description: description.to_string(),
        value: percent,
        valid_months: REWARD_VALIDITY_MONTHS,
    }
}
