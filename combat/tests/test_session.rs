mod aux;

use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::mpsc;

use aux::{
    GreedyCommander, ScriptedCommander, StubbornCommander, player_with, read_session, roster,
    run_session,
};
use combat::{
    CombatEvent, Combatant, Command, DispatchableEvent, EncounterTemplate, MonsterFactory,
    MonsterId, PlayerSpec, PlayerTemplate, Session, SessionResult, SessionTemplate,
};
use models::CardKind::{Defend, Strike};
use models::MonsterKind::Louse;
use models::PlayerClass;
use rstest::rstest;

#[rstest]
fn test_victory(
    #[files("tests/sessions/victory/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_session(&path)?;
    let encounters = template.encounters.len();
    let result = run_session(
        format!("{:?}", path.file_name().unwrap()),
        template,
        &mut GreedyCommander,
    )?;
    assert!(
        matches!(result, SessionResult::Victory(..)),
        "Session `{:?}` failed: Expected `Victory` got `{}`",
        path.file_name().unwrap(),
        result.short_str(),
    );
    assert_eq!(result.inner_ref().encounters_cleared, encounters);
    assert!(!result.inner_ref().player.entity.is_defeated());
    Ok(())
}

#[rstest]
fn test_defeat(
    #[files("tests/sessions/defeat/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_session(&path)?;
    let result = run_session(
        format!("{:?}", path.file_name().unwrap()),
        template,
        &mut GreedyCommander,
    )?;
    assert!(
        matches!(result, SessionResult::Defeat(..)),
        "Session `{:?}` failed: Expected `Defeat` got `{}`",
        path.file_name().unwrap(),
        result.short_str(),
    );
    let inner = result.inner_ref();
    assert_eq!(inner.encounters_cleared, 0);
    assert_eq!(inner.player.entity.health.current(), 0);
    assert_eq!(
        inner.events.last(),
        Some(&combat::TaggedCombatEvent(
            Combatant::Player,
            CombatEvent::Defeated
        ))
    );
    Ok(())
}

#[rstest]
fn test_invalid_template(#[files("tests/sessions/invalid/template/*.toml")] path: PathBuf) {
    assert!(
        read_session(&path).is_err(),
        "Session template `{:?}` should not parse",
        path.file_name().unwrap(),
    );
}

#[rstest]
fn test_invalid_session(
    #[files("tests/sessions/invalid/session/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_session(&path)?;
    let session: anyhow::Result<Session> = template.try_into();
    assert!(
        session.is_err(),
        "Session `{:?}` should be rejected",
        path.file_name().unwrap(),
    );
    Ok(())
}

#[rstest]
fn test_stubborn_commander_stalls() {
    let session = Session::new(
        player_with(30, &[Strike]),
        vec![EncounterTemplate {
            monsters: roster(&[(Louse, 10)]),
        }],
    );
    let result = session.run(&mut StubbornCommander);
    assert!(matches!(result, SessionResult::Stalled(..)));
    assert_eq!(result.short_str(), "Stalled");
    assert_eq!(result.inner_ref().encounters_cleared, 0);
    assert!(result.inner_ref().events.is_empty());
}

#[rstest]
#[case("player = \"ironclad\"", PlayerSpec::Class(PlayerClass::IronClad))]
#[case("player = \"Silent\"", PlayerSpec::Class(PlayerClass::Silent))]
#[case(
    "player = { health = 20, cards = [\"strike\", \"defend\"] }",
    PlayerSpec::Custom(PlayerTemplate { health: 20, cards: vec![Strike, Defend] })
)]
#[case(
    "player = { health = 20 }",
    PlayerSpec::Custom(PlayerTemplate { health: 20, cards: vec![] })
)]
fn test_player_spec_forms(#[case] player: &str, #[case] expected: PlayerSpec) {
    let toml = format!("{player}\n[[encounters]]\nmonsters = [{{ kind = \"louse\", health = 3 }}]\n");
    let template = SessionTemplate::from_toml_str(&toml).unwrap();
    assert_eq!(template.player, expected);
    assert_eq!(template.seed, None);
}

#[rstest]
fn test_class_player_gets_class_stats() {
    let template = SessionTemplate::from_toml_str(
        "player = \"silent\"\n[[encounters]]\nmonsters = [{ kind = \"cultist\", health = 50 }]\n",
    )
    .unwrap();
    let session: Session = template.try_into().unwrap();
    assert_eq!(session.player.entity.health.max(), 70);
    assert_eq!(session.player.deck().len(), 12);
    assert_eq!(session.encounters.len(), 1);
}

#[rstest]
fn test_monster_ids_unique_across_session() -> Result<(), Box<dyn std::error::Error>> {
    let template = read_session(&PathBuf::from("tests/sessions/victory/gauntlet.toml"))?;
    let result = run_session("gauntlet".to_string(), template, &mut GreedyCommander)?;
    let ids: HashSet<MonsterId> = result
        .inner_ref()
        .events
        .iter()
        .filter_map(|e| match e.0 {
            Combatant::Monster(id) => Some(id),
            Combatant::Player => match e.1 {
                CombatEvent::DealDamage(Combatant::Monster(id), ..) => Some(id),
                _ => None,
            },
        })
        .collect();
    assert_eq!(
        ids,
        HashSet::from([MonsterId::from(0), MonsterId::from(1), MonsterId::from(2)])
    );
    Ok(())
}

#[rstest]
fn test_scripted_session_reports_progress() {
    let (tx, rx) = mpsc::channel();
    let louse = MonsterId::from(0);
    let second_louse = MonsterId::from(1);
    let session = Session::new(
        player_with(50, &[Strike, Strike, Strike, Strike]),
        vec![
            EncounterTemplate {
                monsters: roster(&[(Louse, 6)]),
            },
            EncounterTemplate {
                monsters: roster(&[(Louse, 12)]),
            },
        ],
    )
    .with_factory(MonsterFactory::seeded(99))
    .with_channel(tx);

    let mut commander = ScriptedCommander(VecDeque::from([
        Command::play_at("Strike", louse),
        Command::play_at("Strike", second_louse),
        Command::play_at("Strike", second_louse),
    ]));
    let result = session.run(&mut commander);
    assert!(matches!(result, SessionResult::Victory(..)), "{result}");
    assert_eq!(result.inner_ref().encounters_cleared, 2);
    assert_eq!(result.inner_ref().player.entity.health.current(), 50);

    let cleared: Vec<usize> = rx
        .try_iter()
        .filter_map(|e| match e {
            DispatchableEvent::EncounterCleared(number) => Some(number),
            _ => None,
        })
        .collect();
    assert_eq!(cleared, vec![0, 1]);
}

#[rstest]
fn test_defeated_player_skips_remaining_encounters() -> Result<(), Box<dyn std::error::Error>> {
    let template = read_session(&PathBuf::from("tests/sessions/defeat/defenceless.toml"))?;
    let result = run_session("defenceless".to_string(), template, &mut GreedyCommander)?;
    let spawned_louse = result
        .inner_ref()
        .events
        .iter()
        .any(|e| e.0 == Combatant::Monster(MonsterId::from(1)));
    assert!(!spawned_louse);
    Ok(())
}
