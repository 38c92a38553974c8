//! Scenes past the treeline: the river, the beach, and the canyon.

use super::{
    CROSS_WITH_ROPE, CROSS_WITHOUT_ROPE, FORD_WITH_POLE, FORD_WITHOUT_POLE, SceneId, Stage,
    Transition,
};
use crate::error::StoryResult;
use crate::item::Item;
use crate::player::Player;

/// Points for making it across the river.
const FORD_BONUS: u32 = 4;
/// Points for a clean canyon crossing with the rope.
const CLEAN_CROSSING_BONUS: u32 = 6;
/// Points for scraping across without the rope.
const PARTIAL_CROSSING_BONUS: u32 = 3;
/// Points for taking the safe way around the canyon.
const BACKTRACK_BONUS: u32 = 2;

/// Chance of fording the river with what the player carries.
pub fn ford_threshold(player: &Player) -> f64 {
    if player.has(Item::BranchPole) {
        FORD_WITH_POLE
    } else {
        FORD_WITHOUT_POLE
    }
}

pub(super) fn river(stage: &mut Stage<'_>) -> StoryResult<Transition> {
    stage.say("The trail ends at a wide river, black and fast under the rising moon.")?;

    if stage.confirm("Pick up the fallen branch on the bank?")? {
        stage.say("You strip away the twigs. It will make a fine wading pole.")?;
        stage.acquire(Item::BranchPole)?;
    } else {
        stage.say("You leave the branch where it fell.")?;
    }

    let next = match stage.choose(
        "Do you ford the river, wait, or follow it downstream?",
        &["ford", "wait", "follow"],
    )? {
        "ford" => {
            let threshold = ford_threshold(stage.player);
            if stage.roll(threshold) {
                stage.say("You brace against the current and haul yourself onto the far bank.")?;
                stage.heal(0, FORD_BONUS)?;
                SceneId::Canyon
            } else {
                stage.say("The current knocks you off your feet and drags you downstream.")?;
                stage.damage(1)?;
                SceneId::Beach
            }
        }
        "wait" => {
            stage.say("You wait. Near midnight the water drops enough to cross on the stones.")?;
            SceneId::Canyon
        }
        _ => {
            stage.say("You follow the river until it spills out onto a pale beach.")?;
            SceneId::Beach
        }
    };
    Ok(Transition::Goto(next))
}

pub(super) fn beach(stage: &mut Stage<'_>) -> StoryResult<Transition> {
    stage.say("Waves lap at a narrow beach. Driftwood is heaped against the rocks.")?;

    if stage.confirm("Take the glass shard glinting in the sand?")? {
        stage.acquire(Item::GlassShard)?;
    }

    if stage.confirm("Try to light a fire?")? {
        stage.say("Digging for dry stones, you turn up a piece of flint. Sparks catch at last.")?;
        stage.acquire(Item::Flint)?;
        stage.heal(1, 2)?;
    } else {
        stage.say("You shiver in the dark and move on.")?;
    }

    stage.say("A path climbs from the beach toward a rocky canyon.")?;
    Ok(Transition::Goto(SceneId::Canyon))
}

pub(super) fn canyon(stage: &mut Stage<'_>) -> StoryResult<Transition> {
    stage.say("A deep canyon splits the forest. A single fallen log spans the gap.")?;

    if stage.confirm("Search the rocks before deciding?")? {
        stage.say("Wedged in a crevice you find a coil of old rope.")?;
        stage.acquire(Item::Rope)?;
    }

    if !stage.confirm("Cross the canyon on the log?")? {
        stage.say("You take the long way around, safe and steady.")?;
        stage.heal(0, BACKTRACK_BONUS)?;
        return Ok(Transition::Goto(SceneId::Gate));
    }

    if stage.player.has(Item::Rope) {
        if stage.roll(CROSS_WITH_ROPE) {
            stage.say("You tie the rope off and cross cleanly.")?;
            stage.heal(0, CLEAN_CROSSING_BONUS)?;
        } else {
            stage.say("The rope slips and you slam against the rock.")?;
            stage.damage(1)?;
        }
    } else if stage.roll(CROSS_WITHOUT_ROPE) {
        stage.say("You wobble across, scraped but whole.")?;
        stage.heal(0, PARTIAL_CROSSING_BONUS)?;
    } else {
        stage.say("You lose your footing and tumble onto a ledge below.")?;
        stage.damage(1)?;
    }

    Ok(Transition::Goto(SceneId::Gate))
}
