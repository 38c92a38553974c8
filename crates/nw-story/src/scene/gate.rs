//! The gate at the forest's edge.

use super::{Stage, Transition};
use crate::error::StoryResult;
use crate::outcome::Ending;

pub(super) fn gate(stage: &mut Stage<'_>) -> StoryResult<Transition> {
    stage.say("At last you reach an iron gate at the forest's edge.")?;

    let ending = Ending::resolve(stage.player);
    tracing::info!(
        ending = %ending,
        health = stage.player.health(),
        score = stage.player.score(),
        "ending resolved"
    );

    stage.say(ending.description())?;
    if ending.bonus() > 0 {
        stage.heal(0, ending.bonus())?;
    }
    stage.say(&format!("*** {} ***", ending.title()))?;

    Ok(Transition::Conclude(ending))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::player::Player;
    use crate::scene::SceneId;
    use crate::scene::testing::play;

    #[test]
    fn gate_applies_bonus_and_concludes() {
        let mut p = Player::new();
        let _ = p.add(Item::ForestMap, 10);
        let _ = p.add(Item::SilverWhistle, 12);
        let (t, transcript) = play(SceneId::Gate, &mut p, &[], &[]);
        assert_eq!(t, Transition::Conclude(Ending::Rescued));
        assert_eq!(p.score(), 22 + 15);
        assert!(transcript.contains("*** Rescued ***"));
    }

    #[test]
    fn lost_ending_has_no_bonus() {
        let mut p = Player::new();
        let _ = p.damage(1);
        let (t, transcript) = play(SceneId::Gate, &mut p, &[], &[]);
        assert_eq!(t, Transition::Conclude(Ending::LostToTheForest));
        assert_eq!(p.score(), 0);
        assert!(!transcript.contains("points"));
    }
}
