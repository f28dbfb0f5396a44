use std::io::Write;

use tcg_agent::{Agent, AgentError, PolicyKind, build_agent};
use tcg_content::{CardCatalog, ConfigLoader};
use tcg_core::{
    Action, CharPos, CharacterView, Die, GameEnv, GameInfo, GamePhase, GameStatus, PlayerId,
    PlayerView,
};
use tempfile::NamedTempFile;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn side(names: [&str; 3]) -> PlayerView {
    let mut view = PlayerView::default();
    for name in names {
        view.characters.push(CharacterView::new(name, 10, 0));
    }
    view
}

fn snapshot(phase: GamePhase, round: u32, players: &[PlayerView; 2]) -> GameInfo {
    GameInfo::new(phase.status(), phase, players.clone()).with_round(round)
}

/// Stands in for the rules engine: removes spent dice and played cards and
/// applies switches.
fn apply(view: &mut PlayerView, action: &Action) {
    let mut spent = action.dice_idx().to_vec();
    spent.sort_unstable_by(|a, b| b.cmp(a));
    for idx in spent {
        view.dice_zone.remove(idx);
    }

    match action {
        Action::UseCard(card) => {
            view.hand_cards.remove(card.card_idx);
        }
        Action::ChangeCharacter(change) => view.active_character_position = change.position,
        _ => {}
    }
}

fn skill_name(action: &Action) -> &str {
    match action {
        Action::UseSkill(skill) => &skill.skill_name,
        other => panic!("expected a skill, got {other:?}"),
    }
}

/// Full match walk for both seats.
///
/// 1. Initializing: both seats keep their hand and open with the middle slot
/// 2. Roll dice: only off-element faces are rerolled
/// 3. Play cards: the single-action seat plays its talent card, then spends
///    the rest on skills until nothing is affordable
/// 4. Play cards: the sequence seat attacks once and declares end
/// 5. Round end: a defeated active character is replaced
#[test]
fn test_complete_match_walk() {
    init_tracing();

    let catalog = CardCatalog::load().expect("embedded catalog should load");
    let env = GameEnv::with_cards(&catalog);

    let mut first = build_agent(PolicyKind::AttackOnly, PlayerId::First, Default::default());
    let mut second = build_agent(
        PolicyKind::AttackSequence,
        PlayerId::Second,
        Default::default(),
    );

    let mut players = [
        side(["Xingqiu", "Kamisato Ayaka", "Noelle"]),
        side(["Fischl", "Diluc", "Collei"]),
    ];
    players[0].hand_cards = vec!["Kanten Senmyou Blessing".to_string()];

    // ================================================================
    // PHASE 1: Initializing
    // ================================================================
    let info = snapshot(GamePhase::ChangeCard, 0, &players);
    assert_eq!(
        first.take_action(&info, env).expect("mulligan"),
        Action::change_cards(vec![])
    );
    assert_eq!(
        second.take_action(&info, env).expect("mulligan"),
        Action::change_cards(vec![])
    );

    let info = snapshot(GamePhase::SelectActiveCharacter, 0, &players);
    for (seat, agent) in [&mut first, &mut second].into_iter().enumerate() {
        let action = agent.take_action(&info, env).expect("select character");
        assert_eq!(action, Action::switch_to(CharPos::Middle));
        apply(&mut players[seat], &action);
    }

    // ================================================================
    // PHASE 2: Roll dice
    // ================================================================
    players[0].dice_zone = vec![
        Die::Cryo,
        Die::Pyro,
        Die::Omni,
        Die::Geo,
        Die::Cryo,
        Die::Hydro,
    ];
    let info = snapshot(GamePhase::RollDice, 1, &players);
    assert_eq!(
        first.take_action(&info, env).expect("reroll"),
        Action::roll_dice(vec![1, 3, 5])
    );

    // ================================================================
    // PHASE 3: Play cards, single-action seat
    // ================================================================
    players[0].dice_zone = vec![
        Die::Cryo,
        Die::Omni,
        Die::Cryo,
        Die::Cryo,
        Die::Geo,
        Die::Cryo,
        Die::Omni,
        Die::Pyro,
    ];

    let info = snapshot(GamePhase::PlayCards, 1, &players);
    let action = first.take_action(&info, env).expect("talent card");
    assert!(matches!(action, Action::UseCard(_)));
    assert_eq!(action.dice_idx(), &[0, 2]);
    apply(&mut players[0], &action);
    assert!(players[0].hand_cards.is_empty());

    let info = snapshot(GamePhase::PlayCards, 1, &players);
    let action = first.take_action(&info, env).expect("elemental skill");
    assert_eq!(skill_name(&action), "Kamisato Art: Hyouka");
    assert_eq!(action.dice_idx(), &[1, 3, 0]);
    apply(&mut players[0], &action);
    assert_eq!(players[0].dice_zone, vec![Die::Geo, Die::Omni, Die::Pyro]);

    let info = snapshot(GamePhase::PlayCards, 1, &players);
    let action = first.take_action(&info, env).expect("normal attack");
    assert_eq!(skill_name(&action), "Kamisato Art: Kabuki");
    assert_eq!(action.dice_idx(), &[1, 0, 2]);
    apply(&mut players[0], &action);
    assert!(players[0].dice_zone.is_empty());

    let info = snapshot(GamePhase::PlayCards, 1, &players);
    assert_eq!(
        first.take_action(&info, env).expect("out of dice"),
        Action::DeclareEnd
    );

    // ================================================================
    // PHASE 4: Play cards, sequence seat
    // ================================================================
    players[1].dice_zone = vec![Die::Pyro, Die::Pyro, Die::Omni, Die::Pyro];

    let info = snapshot(GamePhase::PlayCards, 1, &players);
    let action = second.take_action(&info, env).expect("elemental skill");
    assert_eq!(skill_name(&action), "Searing Onslaught");
    assert_eq!(action.dice_idx(), &[0, 1, 3]);
    match &action {
        Action::UseSkill(skill) => {
            assert_eq!(skill.skill_targets[0].player, PlayerId::First);
            assert_eq!(skill.skill_targets[0].position, CharPos::Middle);
        }
        other => panic!("expected a skill, got {other:?}"),
    }
    apply(&mut players[1], &action);

    let info = snapshot(GamePhase::PlayCards, 1, &players);
    assert_eq!(
        second.take_action(&info, env).expect("one omni left"),
        Action::DeclareEnd
    );

    // ================================================================
    // PHASE 5: Round end
    // ================================================================
    players[1].characters[1].health_point = 0;
    players[1].characters[1].alive = false;

    let info = snapshot(GamePhase::RoundEnd, 1, &players);
    assert_eq!(
        first.take_action(&info, env).expect("round end"),
        Action::DeclareEnd
    );
    let action = second.take_action(&info, env).expect("replace defeated");
    assert_eq!(action, Action::switch_to(CharPos::Left));
    apply(&mut players[1], &action);

    // ================================================================
    // PHASE 6: Terminated
    // ================================================================
    let mut info = snapshot(GamePhase::RoundEnd, 1, &players);
    info.status = GameStatus::Terminated;
    assert!(first.take_action(&info, env).expect("terminated").is_declare_end());
    assert!(second.take_action(&info, env).expect("terminated").is_declare_end());
}

#[test]
fn test_charged_burst_after_rounds() {
    init_tracing();

    let catalog = CardCatalog::load().expect("embedded catalog should load");
    let mut agent = build_agent(PolicyKind::AttackOnly, PlayerId::First, Default::default());

    let mut players = [
        side(["Xingqiu", "Kamisato Ayaka", "Noelle"]),
        side(["Fischl", "Diluc", "Collei"]),
    ];
    players[0].active_character_position = CharPos::Left;
    players[0].characters[0].power = 2;
    players[0].dice_zone = vec![Die::Hydro, Die::Hydro, Die::Omni, Die::Hydro];

    let info = snapshot(GamePhase::PlayCards, 3, &players);
    let action = agent
        .take_action(&info, GameEnv::with_cards(&catalog))
        .expect("burst");

    assert_eq!(skill_name(&action), "Raincutter");
    assert_eq!(action.dice_idx(), &[0, 1, 3]);
}

#[test]
fn test_config_file_drives_combos() {
    init_tracing();

    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
        [[combos]]
        card = "Paimon"
        target = "support"
        cost = [["same", 3]]
        "#
    )
    .expect("write config");

    let config = ConfigLoader::load(file.path()).expect("config should parse");
    assert_eq!(config.combos.len(), 1);

    let catalog = CardCatalog::load().expect("embedded catalog should load");
    let mut agent = build_agent(PolicyKind::AttackOnly, PlayerId::Second, config);

    let mut players = [
        side(["Xingqiu", "Kamisato Ayaka", "Noelle"]),
        side(["Fischl", "Diluc", "Collei"]),
    ];
    players[1].active_character_position = CharPos::Middle;
    players[1].hand_cards = vec!["Kanten Senmyou Blessing".to_string(), "Paimon".to_string()];
    players[1].dice_zone = vec![Die::Geo, Die::Geo, Die::Dendro, Die::Geo, Die::Pyro];

    let info = snapshot(GamePhase::PlayCards, 1, &players);
    let action = agent
        .take_action(&info, GameEnv::with_cards(&catalog))
        .expect("support card");

    match action {
        Action::UseCard(card) => {
            assert_eq!(card.card_idx, 1);
            assert_eq!(card.dice_idx, vec![0, 1, 3]);
            assert_eq!(card.card_target[0].player, PlayerId::Second);
        }
        other => panic!("expected a card, got {other:?}"),
    }
}

#[test]
fn test_missing_card_metadata_surfaces_error() {
    let mut agent = build_agent(PolicyKind::AttackSequence, PlayerId::First, Default::default());
    let mut players = [side(["Nobody", "Nobody", "Nobody"]), PlayerView::default()];
    players[0].dice_zone = vec![Die::Omni];

    let info = snapshot(GamePhase::RollDice, 1, &players);
    let err = agent
        .take_action(&info, GameEnv::empty())
        .expect_err("no card oracle");

    assert!(matches!(err, AgentError::Oracle(_)));
}
