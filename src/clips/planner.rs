use super::{combination::Combination, ClipSet};
use crate::{config::Policy, error::ConfigError};
use rand::{seq::SliceRandom, Rng};

/// Builds every combination the policy allows, in a deterministic order.
pub fn plan(
    set: ClipSet,
    policy: Policy,
    mandatory_name: &str,
) -> Result<Vec<Combination>, ConfigError> {
    let ClipSet {
        mut clips,
        mandatory,
    } = set;

    let mut combinations = vec![];
    match policy {
        Policy::MandatoryRequired => {
            let mandatory = mandatory
                .ok_or_else(|| ConfigError::MandatoryClipMissing(mandatory_name.to_string()))?;
            if clips.len() < 2 {
                return Err(ConfigError::NotEnoughClipsForMandatory {
                    name: mandatory_name.to_string(),
                    found: clips.len(),
                });
            }
            for (i, a) in clips.iter().enumerate() {
                for (j, b) in clips.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let m = &mandatory;
                    combinations.push(Combination::new(m.clone(), a.clone(), b.clone()));
                    combinations.push(Combination::new(a.clone(), m.clone(), b.clone()));
                    combinations.push(Combination::new(a.clone(), b.clone(), m.clone()));
                }
            }
        }
        Policy::MandatoryOptional => {
            clips.extend(mandatory);
            if clips.len() < 3 {
                return Err(ConfigError::NotEnoughClips { found: clips.len() });
            }
            let n = clips.len();
            for i in 0..n {
                for j in 0..n {
                    for k in 0..n {
                        if i == j || i == k || j == k {
                            continue;
                        }
                        combinations.push(Combination::new(
                            clips[i].clone(),
                            clips[j].clone(),
                            clips[k].clone(),
                        ));
                    }
                }
            }
        }
    }
    debug_assert!(combinations.iter().all(|c| !c.has_repeat()));
    log::debug!("{} combinations planned ({:?})", combinations.len(), policy);
    Ok(combinations)
}

/// Randomizes processing order. Membership is untouched.
pub fn shuffle<R: Rng + ?Sized>(combinations: &mut [Combination], rng: &mut R) {
    combinations.shuffle(rng);
}
