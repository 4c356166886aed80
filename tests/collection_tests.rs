//! Card collection integration tests.
//!
//! These tests verify collection construction, card placement, and
//! top-down event delegation across multiple cards.

use rust_bingo::cards::{HIGHLIGHT_SPRITE, LABEL_SPRITE, MARKER_SPRITE};
use rust_bingo::{
    CardCollection, CardConfig, ClickEvent, Drawable, GameRng, Position, Scale, SpriteAtlas,
    SpriteInstance, SpriteSpec, Surface,
};

fn atlas() -> SpriteAtlas {
    let mut atlas = SpriteAtlas::new();
    atlas.register(SpriteSpec::new(LABEL_SPRITE, 50, 50));
    atlas.register(SpriteSpec::new(MARKER_SPRITE, 56, 56));
    atlas.register(SpriteSpec::new(HIGHLIGHT_SPRITE, 58, 58));
    atlas
}

fn card_offsets() -> Vec<Position> {
    vec![
        Position::new(0, 0),
        Position::new(400, 0),
        Position::new(0, 400),
        Position::new(400, 400),
    ]
}

#[test]
fn collection_holds_one_card_per_offset_in_order() {
    let config = CardConfig::classic(60);
    let mut rng = GameRng::new(42);
    let origin = Position::new(30, 40);
    let offsets = card_offsets();

    let collection =
        CardCollection::new("player", origin, &offsets, &config, &atlas(), &mut rng).unwrap();

    assert_eq!(collection.len(), offsets.len());
    for (i, &offset) in offsets.iter().enumerate() {
        let card = collection.card(i).unwrap();
        assert_eq!(card.name(), format!("player({})", i + 1));
        assert_eq!(card.position(), origin + offset);
        assert_eq!(card.len(), 25);
    }
    assert!(collection.card(offsets.len()).is_none());
}

#[test]
fn cards_deal_independently() {
    // Each card shuffles fresh piles; with a seeded RNG the cards of one
    // collection still differ from each other almost surely.
    let config = CardConfig::classic(60);
    let mut rng = GameRng::new(42);
    let collection = CardCollection::new(
        "player",
        Position::ORIGIN,
        &card_offsets(),
        &config,
        &atlas(),
        &mut rng,
    )
    .unwrap();

    let fingerprint = |index: usize| -> Vec<i32> {
        let card = collection.card(index).unwrap();
        config
            .square_offsets
            .iter()
            .map(|&coord| card.square(coord).unwrap().number())
            .collect()
    };

    assert_ne!(fingerprint(0), fingerprint(1));
    assert_ne!(fingerprint(1), fingerprint(2));
}

#[test]
fn same_seed_reproduces_the_whole_collection() {
    let config = CardConfig::classic(60);
    let build = |seed: u64| {
        let mut rng = GameRng::new(seed);
        CardCollection::new(
            "player",
            Position::ORIGIN,
            &card_offsets(),
            &config,
            &atlas(),
            &mut rng,
        )
        .unwrap()
    };

    let first = build(7);
    let second = build(7);

    for index in 0..first.len() {
        for &coord in &config.square_offsets {
            assert_eq!(
                first.card(index).unwrap().square(coord).unwrap().number(),
                second.card(index).unwrap().square(coord).unwrap().number(),
            );
        }
    }
}

#[test]
fn click_outside_every_square_changes_nothing_anywhere() {
    let config = CardConfig::classic(60);
    let mut rng = GameRng::new(42);
    let mut collection = CardCollection::new(
        "player",
        Position::ORIGIN,
        &card_offsets(),
        &config,
        &atlas(),
        &mut rng,
    )
    .unwrap();

    // Far away from all four cards.
    let reacted =
        collection.process_events(&ClickEvent::at(10_000, 10_000), Scale::IDENTITY, &mut rng);

    assert_eq!(reacted, 0);
    assert!(collection
        .cards()
        .all(|card| card.squares().all(|s| !s.is_called && !s.is_highlighted)));
}

#[test]
fn click_is_attributed_to_one_square_across_the_collection() {
    let config = CardConfig::classic(60);
    let mut rng = GameRng::new(42);
    let mut collection = CardCollection::new(
        "player",
        Position::ORIGIN,
        &card_offsets(),
        &config,
        &atlas(),
        &mut rng,
    )
    .unwrap();

    // Center of card 3's (2, 2) square: offset (0, 400) + spacing 60 * (2, 2).
    let reacted =
        collection.process_events(&ClickEvent::at(120, 520), Scale::IDENTITY, &mut rng);

    assert_eq!(reacted, 1);
    let called: usize = collection
        .cards()
        .map(|card| card.squares().filter(|s| s.is_called).count())
        .sum();
    assert_eq!(called, 1);
}

#[test]
fn highlight_reaches_every_card_carrying_the_number() {
    let config = CardConfig::classic(60);
    let mut rng = GameRng::new(42);
    let mut collection = CardCollection::new(
        "player",
        Position::ORIGIN,
        &card_offsets(),
        &config,
        &atlas(),
        &mut rng,
    )
    .unwrap();

    // Column 0 deals 5 of 15 numbers per card, so some number appears on
    // at least one card; find one and highlight it everywhere.
    let number = collection
        .card(0)
        .unwrap()
        .column_numbers(0)
        .first()
        .copied()
        .unwrap();

    let carrying: usize = collection
        .cards()
        .map(|card| card.squares().filter(|s| s.number() == number).count())
        .sum();

    assert_eq!(collection.set_number_highlight(number, true), carrying);
    assert!(carrying >= 1);

    let highlighted: usize = collection
        .cards()
        .map(|card| card.squares().filter(|s| s.is_highlighted).count())
        .sum();
    assert_eq!(highlighted, carrying);
}

#[test]
fn draw_covers_every_square_of_every_card() {
    struct Counter(usize);
    impl Surface for Counter {
        fn draw_sprite(&mut self, _sprite: &SpriteInstance) {
            self.0 += 1;
        }
    }

    let config = CardConfig::classic(60);
    let mut rng = GameRng::new(42);
    let collection = CardCollection::new(
        "player",
        Position::ORIGIN,
        &card_offsets(),
        &config,
        &atlas(),
        &mut rng,
    )
    .unwrap();

    let mut surface = Counter(0);
    collection.draw(&mut surface);
    assert_eq!(surface.0, 4 * 25);
}
