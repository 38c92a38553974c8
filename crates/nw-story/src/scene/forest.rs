//! Scenes under the trees: the waking glade, the hut, and the riddle clearing.

use super::{SceneId, Stage, Transition};
use crate::error::StoryResult;
use crate::item::Item;

/// Substring that answers the clearing's riddle.
const RIDDLE_ANSWER: &str = "echo";

pub(super) fn intro(stage: &mut Stage<'_>) -> StoryResult<Transition> {
    stage.say("You wake on damp moss beneath towering pines. Night is falling.")?;
    stage.say("A narrow trail leads north toward a curl of smoke. To the east, water rushes.")?;

    let next = match stage.choose("Which way do you go?", &["north", "east"])? {
        "north" => SceneId::Hut,
        _ => SceneId::River,
    };
    Ok(Transition::Goto(next))
}

pub(super) fn hut(stage: &mut Stage<'_>) -> StoryResult<Transition> {
    stage.say("A crooked hut squats among the trees, its shutters hanging loose.")?;

    if stage.confirm("Look under the doormat?")? {
        stage.say("Beneath the mat, something glints.")?;
        stage.acquire(Item::RustyKey)?;
    } else {
        stage.say("You leave the mat undisturbed.")?;
    }

    if !stage.confirm("Step inside the hut?")? {
        stage.say("Whoever lived here is long gone. You press on.")?;
        return Ok(Transition::Goto(SceneId::Clearing));
    }

    stage.say("Dust hangs in the air. A heavy chest sits in the corner beside a laden shelf.")?;

    if stage.player.has(Item::RustyKey) {
        if stage.confirm("Try the rusty key on the chest?")? {
            stage.say("The lock gives with a groan. Folded inside is a weathered map.")?;
            stage.acquire(Item::ForestMap)?;
        } else {
            stage.say("You leave the chest closed.")?;
        }
    } else {
        stage.say("The chest is locked tight. Without a key there is nothing to be done.")?;
    }

    if stage.confirm("Eat from the bundle on the shelf?")? {
        stage.say("Dried rations. You eat a strip and pack the rest.")?;
        stage.acquire(Item::DriedRations)?;
        stage.heal(1, 2)?;
    } else {
        stage.say("You leave the food where it is.")?;
    }

    if stage.confirm("Leave the hut now?")? {
        stage.say("You step back out into the dusk.")?;
    } else {
        stage.say("You sit by the cold hearth a while, listening to the wind, then move on.")?;
    }

    Ok(Transition::Goto(SceneId::Clearing))
}

pub(super) fn clearing(stage: &mut Stage<'_>) -> StoryResult<Transition> {
    stage.say("Moonlight fills a ring of standing stones. A figure of mist drifts between them.")?;
    stage.say("'I speak without a mouth and hear without ears. What am I?'")?;

    let answer = stage.free_text("Your answer")?;
    if answer.to_lowercase().contains(RIDDLE_ANSWER) {
        stage.say("The figure smiles and presses something cold into your palm.")?;
        stage.acquire(Item::SilverWhistle)?;
    } else {
        stage.say("The mist thickens and chills you to the bone.")?;
        stage.damage(1)?;
    }

    stage.say("One path climbs into the hills. Another winds down toward the river.")?;
    let next = match stage.choose("Which path?", &["hills", "river"])? {
        "hills" => SceneId::Canyon,
        _ => SceneId::River,
    };
    Ok(Transition::Goto(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::scene::testing::play;

    #[test]
    fn intro_north_goes_to_hut() {
        let mut p = Player::new();
        let (t, _) = play(SceneId::Intro, &mut p, &["north"], &[]);
        assert_eq!(t, Transition::Goto(SceneId::Hut));
    }

    #[test]
    fn intro_east_goes_to_river() {
        let mut p = Player::new();
        let (t, _) = play(SceneId::Intro, &mut p, &[" EAST "], &[]);
        assert_eq!(t, Transition::Goto(SceneId::River));
    }

    #[test]
    fn hut_declined_entirely() {
        let mut p = Player::new();
        let (t, _) = play(SceneId::Hut, &mut p, &["no", "no"], &[]);
        assert_eq!(t, Transition::Goto(SceneId::Clearing));
        assert_eq!(p, Player::new());
    }

    #[test]
    fn hut_full_loot() {
        let mut p = Player::new();
        let (t, transcript) = play(SceneId::Hut, &mut p, &["yes", "yes", "yes", "yes", "yes"], &[]);
        assert_eq!(t, Transition::Goto(SceneId::Clearing));
        assert!(p.has_all(&[Item::RustyKey, Item::ForestMap, Item::DriedRations]));
        assert_eq!(p.score(), 8 + 10 + 5 + 2);
        assert_eq!(p.health(), 4);
        assert!(transcript.contains("You obtained the forest map!"));
    }

    #[test]
    fn hut_without_key_skips_chest_without_penalty() {
        let mut p = Player::new();
        let (t, transcript) = play(SceneId::Hut, &mut p, &["no", "yes", "no", "no"], &[]);
        assert_eq!(t, Transition::Goto(SceneId::Clearing));
        assert!(transcript.contains("locked tight"));
        assert_eq!(p, Player::new());
    }

    #[test]
    fn hut_key_kept_but_chest_left_closed() {
        let mut p = Player::new();
        play(SceneId::Hut, &mut p, &["yes", "yes", "no", "no", "yes"], &[]);
        assert!(p.has(Item::RustyKey));
        assert!(!p.has(Item::ForestMap));
        assert_eq!(p.score(), 8);
    }

    #[test]
    fn clearing_riddle_is_loose_match() {
        for answer in ["echo", "An ECHO!", "it's an echo i think"] {
            let mut p = Player::new();
            let (t, _) = play(SceneId::Clearing, &mut p, &[answer, "hills"], &[]);
            assert_eq!(t, Transition::Goto(SceneId::Canyon));
            assert!(p.has(Item::SilverWhistle), "answer {answer:?}");
            assert_eq!(p.health(), 3);
            assert_eq!(p.score(), 12);
        }
    }

    #[test]
    fn clearing_wrong_answer_always_hurts() {
        for answer in ["stone", "", "e c h o"] {
            let mut p = Player::new();
            let (t, _) = play(SceneId::Clearing, &mut p, &[answer, "river"], &[]);
            assert_eq!(t, Transition::Goto(SceneId::River));
            assert!(!p.has(Item::SilverWhistle));
            assert_eq!(p.health(), 2);
        }
    }
}
