//! Scene tick integration tests: draw order, readiness, commands and throttles.

use bevy_ecs::prelude::*;

use spriteparallax::components::creature::{AnimationState, Creature, CreatureKind, Player};
use spriteparallax::components::kinematic::Kinematic;
use spriteparallax::components::mapposition::MapPosition;
use spriteparallax::components::scrollinglayer::ScrollingLayer;
use spriteparallax::components::wander::Wander;
use spriteparallax::components::zindex::ZIndex;
use spriteparallax::events::scene::{SceneCommand, SpawnRequest};
use spriteparallax::game::{SceneCompositor, layer_key};
use spriteparallax::resources::animationstore::SpriteRect;
use spriteparallax::resources::framebuffer::{DrawCmd, FrameBuffer};
use spriteparallax::resources::framescheduler::TickOutcome;
use spriteparallax::resources::gameconfig::GameConfig;
use spriteparallax::resources::scrollspeed::ScrollSpeed;
use spriteparallax::resources::texturestore::{BitmapInfo, TextureStore};
use spriteparallax::systems::movement::kinematic_movement;
use spriteparallax::systems::parallax::parallax_layers;

const LAYER: BitmapInfo = BitmapInfo {
    width: 2400,
    height: 700,
};
const SHEET: BitmapInfo = BitmapInfo {
    width: 6900,
    height: 5230,
};

/// Compositor whose bitmaps are all ready, without any loader threads.
fn ready_scene(config: GameConfig) -> SceneCompositor {
    let mut scene = SceneCompositor::new(config).unwrap().with_seed(42);
    {
        let mut store = scene.world_mut().resource_mut::<TextureStore>();
        for index in 0..5 {
            store.mark_ready(layer_key(index), LAYER);
        }
        for kind in CreatureKind::ALL {
            store.mark_ready(kind.tex_key(), SHEET);
        }
    }
    scene
}

fn blit_keys(frame: &FrameBuffer) -> Vec<String> {
    frame.blits().map(|(key, _, _)| key.to_string()).collect()
}

/// Fire `count` ticks spaced well above the minimum interval.
fn run_ticks(scene: &mut SceneCompositor, start_ms: f64, count: usize) -> Vec<TickOutcome> {
    (0..count)
        .map(|i| scene.tick(start_ms + i as f64 * 20.0))
        .collect()
}

#[test]
fn layers_draw_back_to_front_before_creatures() {
    let mut scene = ready_scene(GameConfig::new());
    // added out of order on purpose
    scene.add_layer(ScrollingLayer::new(layer_key(2), 2400.0, 700.0, 0.6), 2);
    scene.add_layer(ScrollingLayer::new(layer_key(0), 2400.0, 700.0, 0.2), 0);
    scene.spawn_creature(&SpawnRequest::new(CreatureKind::Enemy1, 10.0, 10.0));
    scene.spawn_creature(&SpawnRequest::new(CreatureKind::Dog, 0.0, 400.0).as_player());
    scene.add_layer(ScrollingLayer::new(layer_key(1), 2400.0, 700.0, 0.4), 1);

    scene.start();
    assert_eq!(scene.tick(0.0), TickOutcome::Draw);

    let frame = scene.frame();
    assert!(matches!(frame.commands()[0], DrawCmd::Clear(_)));
    assert_eq!(
        blit_keys(frame),
        vec![
            "layer-1", "layer-1", "layer-2", "layer-2", "layer-3", "layer-3", "enemy1",
            "shadow_dog",
        ]
    );
}

#[test]
fn populated_scene_draws_every_layer_and_creature() {
    let mut scene = ready_scene(GameConfig::new());
    scene.populate();
    scene.start();
    assert_eq!(scene.tick(0.0), TickOutcome::Draw);

    let keys = blit_keys(scene.frame());
    // two copies per layer, then the dog and four enemies
    assert_eq!(keys.len(), 5 * 2 + 1 + 4);
    assert_eq!(keys[10], "shadow_dog");
    assert!(keys[11..].iter().all(|k| k.starts_with("enemy")));

    let world = scene.world_mut();
    let players = world.query_filtered::<&Creature, With<Player>>().iter(world).count();
    assert_eq!(players, 1);
}

#[test]
fn pending_bitmap_skips_the_whole_tick() {
    let mut scene = ready_scene(GameConfig::new());
    scene.populate();
    scene
        .world_mut()
        .resource_mut::<TextureStore>()
        .mark_pending("layer-3");
    scene.start();

    assert_eq!(scene.tick(0.0), TickOutcome::NotReady);
    assert_eq!(scene.frame().frames_drawn(), 0);
    assert!(scene.scheduler().pending().is_some());

    scene
        .world_mut()
        .resource_mut::<TextureStore>()
        .mark_ready("layer-3", LAYER);
    assert_eq!(scene.tick(20.0), TickOutcome::Draw);
    assert_eq!(scene.frame().frames_drawn(), 1);
}

#[test]
fn failed_bitmap_only_hides_its_own_element() {
    let mut scene = ready_scene(GameConfig::new());
    scene.add_layer(ScrollingLayer::new(layer_key(0), 2400.0, 700.0, 0.2), 0);
    scene.add_layer(ScrollingLayer::new(layer_key(1), 2400.0, 700.0, 0.4), 1);
    scene.spawn_creature(&SpawnRequest::new(CreatureKind::Dog, 0.0, 0.0));
    scene.spawn_creature(&SpawnRequest::new(CreatureKind::Enemy2, 0.0, 0.0));
    {
        let mut store = scene.world_mut().resource_mut::<TextureStore>();
        store.mark_failed("layer-1", "corrupt");
        store.mark_failed("enemy2", "missing");
    }
    scene.start();

    let outcomes = run_ticks(&mut scene, 0.0, 3);
    assert!(outcomes.iter().all(|o| *o == TickOutcome::Draw));
    assert_eq!(
        blit_keys(scene.frame()),
        vec!["layer-2", "layer-2", "shadow_dog"]
    );
}

#[test]
fn unknown_state_skips_only_that_creature() {
    let mut scene = ready_scene(GameConfig::new());
    let ghost = scene.spawn_creature(&SpawnRequest::new(CreatureKind::Enemy4, 0.0, 0.0));
    scene.spawn_creature(&SpawnRequest::new(CreatureKind::Enemy3, 0.0, 0.0));
    scene.send(SceneCommand::SetCreatureState {
        entity: ghost,
        state: "idle".to_string(),
    });
    scene.start();

    assert_eq!(scene.tick(0.0), TickOutcome::Draw);
    assert_eq!(blit_keys(scene.frame()), vec!["enemy3"]);
}

#[test]
fn selecting_a_state_restarts_at_frame_zero() {
    let mut scene = ready_scene(GameConfig::new());
    scene.spawn_creature(
        &SpawnRequest::new(CreatureKind::Dog, 0.0, 0.0)
            .as_player()
            .with_frozen_frames(3),
    );
    scene.start();

    // six ticks with a throttle of three: frames drawn are 0,0,0,1,1,1
    run_ticks(&mut scene, 0.0, 6);
    let (_, src, _) = scene.frame().blits().next().unwrap();
    assert_eq!(*src, SpriteRect::new(575.0, 0.0, 575.0, 523.0));

    scene.select_state(AnimationState::Run);
    assert_eq!(scene.tick(1000.0), TickOutcome::Draw);
    let (_, src, dst) = scene.frame().blits().next().unwrap();
    assert_eq!(*src, SpriteRect::new(0.0, 1569.0, 575.0, 523.0));
    assert_eq!(dst.width, 575.0 / CreatureKind::Dog.default_scale());
}

#[test]
fn unthrottled_state_switch_draws_frame_zero_first() {
    let mut scene = ready_scene(GameConfig::new());
    scene.spawn_creature(
        &SpawnRequest::new(CreatureKind::Dog, 0.0, 0.0)
            .as_player()
            .with_frozen_frames(1),
    );
    scene.start();

    // every tick moves a frame: the fourth tick drew idle frame 3
    run_ticks(&mut scene, 0.0, 4);
    let (_, src, _) = scene.frame().blits().next().unwrap();
    assert_eq!(*src, SpriteRect::new(3.0 * 575.0, 0.0, 575.0, 523.0));

    scene.select_state(AnimationState::Run);
    assert_eq!(scene.tick(1000.0), TickOutcome::Draw);
    let (_, src, _) = scene.frame().blits().next().unwrap();
    assert_eq!(*src, SpriteRect::new(0.0, 1569.0, 575.0, 523.0));

    assert_eq!(scene.tick(1020.0), TickOutcome::Draw);
    let (_, src, _) = scene.frame().blits().next().unwrap();
    assert_eq!(*src, SpriteRect::new(575.0, 1569.0, 575.0, 523.0));
}

#[test]
fn scroll_speed_changes_apply_on_the_next_drawn_tick() {
    let mut scene = ready_scene(GameConfig::new());
    scene.add_layer(ScrollingLayer::new(layer_key(4), 2400.0, 700.0, 1.0), 0);
    scene.start();

    scene.set_scroll_speed(10);
    assert_eq!(scene.scroll_speed().get(), 5);
    assert_eq!(scene.tick(0.0), TickOutcome::Draw);
    assert_eq!(scene.scroll_speed().get(), 10);
    let (_, _, dst) = scene.frame().blits().next().unwrap();
    assert_eq!(dst.x, -10.0);

    scene.set_scroll_speed(999);
    scene.tick(20.0);
    assert_eq!(scene.scroll_speed().get(), scene.config().max_scroll_speed);
}

#[test]
fn queued_speed_nudges_add_up() {
    let mut scene = ready_scene(GameConfig::new());
    scene.add_layer(ScrollingLayer::new(layer_key(4), 2400.0, 700.0, 1.0), 0);
    scene.start();

    // two presses between drawn ticks both count
    scene.adjust_scroll_speed(1);
    scene.adjust_scroll_speed(1);
    assert_eq!(scene.tick(0.0), TickOutcome::Draw);
    assert_eq!(scene.scroll_speed().get(), 7);
    let (_, _, dst) = scene.frame().blits().next().unwrap();
    assert_eq!(dst.x, -7.0);

    scene.set_scroll_speed(2);
    for _ in 0..3 {
        scene.adjust_scroll_speed(-1);
    }
    scene.tick(20.0);
    assert_eq!(scene.scroll_speed().get(), 0);
}

#[test]
fn commanded_spawns_keep_their_tags() {
    let mut scene = ready_scene(GameConfig::new());
    scene.start();
    let enemy = scene.random_enemy_request();
    assert!(enemy.wander.is_some());
    scene.send(SceneCommand::SpawnCreature(
        SpawnRequest::new(CreatureKind::Dog, 0.0, 400.0).as_player(),
    ));
    scene.send(SceneCommand::SpawnCreature(enemy.clone()));
    assert_eq!(scene.tick(0.0), TickOutcome::Draw);

    let world = scene.world_mut();
    let players: Vec<CreatureKind> = world
        .query_filtered::<&Creature, With<Player>>()
        .iter(world)
        .map(|creature| creature.kind)
        .collect();
    assert_eq!(players, vec![CreatureKind::Dog]);
    let wanderers: Vec<CreatureKind> = world
        .query_filtered::<&Creature, With<Wander>>()
        .iter(world)
        .map(|creature| creature.kind)
        .collect();
    assert_eq!(wanderers, vec![enemy.kind]);

    // spawn order survives the deferred spawn
    assert_eq!(
        blit_keys(scene.frame()),
        vec!["shadow_dog".to_string(), enemy.kind.tex_key().to_string()]
    );
}

#[test]
fn spawn_and_steer_through_commands() {
    let mut scene = ready_scene(GameConfig::new());
    scene.start();
    scene.send(SceneCommand::SpawnCreature(
        SpawnRequest::new(CreatureKind::Enemy1, 100.0, 100.0),
    ));
    scene.tick(0.0);

    let entity = {
        let world = scene.world_mut();
        let mut query = world.query_filtered::<Entity, With<Creature>>();
        let found: Vec<Entity> = query.iter(world).collect();
        assert_eq!(found.len(), 1);
        found[0]
    };
    assert_eq!(blit_keys(scene.frame()), vec!["enemy1"]);

    scene.send(SceneCommand::SetDestination {
        entity,
        x: 110.0,
        y: 100.0,
    });
    scene.send(SceneCommand::SetPace {
        entity,
        x: 4.0,
        y: 4.0,
    });
    let outcomes = run_ticks(&mut scene, 20.0, 4);
    assert!(outcomes.iter().all(|o| *o == TickOutcome::Draw));

    // 4 + 4 + 2, then parked
    let pos = scene.world().get::<MapPosition>(entity).unwrap();
    assert_eq!(*pos, MapPosition::new(110.0, 100.0));
}

#[test]
fn spawn_returns_a_live_handle() {
    let mut scene = ready_scene(GameConfig::new());
    let entity = scene.spawn_creature(
        &SpawnRequest::new(CreatureKind::Enemy2, 5.0, 6.0)
            .heading_to(50.0, 6.0)
            .with_pace(3.0, 3.0),
    );
    let world = scene.world();
    assert_eq!(world.get::<Creature>(entity).unwrap().kind, CreatureKind::Enemy2);
    assert_eq!(*world.get::<MapPosition>(entity).unwrap(), MapPosition::new(5.0, 6.0));
    assert!(world.get::<Player>(entity).is_none());
}

#[test]
fn restarting_never_stacks_ticks() {
    let mut scene = ready_scene(GameConfig::new());
    scene.start();
    scene.select_state(AnimationState::Sit);
    scene.select_state(AnimationState::Roll);
    scene.start();

    // a single pending tick draws once and re-arms once
    let first = scene.scheduler().pending();
    assert!(first.is_some());
    assert_eq!(scene.tick(0.0), TickOutcome::Draw);
    let second = scene.scheduler().pending();
    assert!(second.is_some());
    assert_ne!(first, second);

    scene.stop();
    assert_eq!(scene.tick(20.0), TickOutcome::Idle);
    assert_eq!(scene.frame().frames_drawn(), 1);
}

#[test]
fn throttled_and_frozen_ticks_draw_nothing() {
    let mut config = GameConfig::new();
    config.scene_frozen_frames = 2;
    let mut scene = ready_scene(config);
    scene.start();

    assert_eq!(scene.tick(0.0), TickOutcome::Frozen);
    assert_eq!(scene.tick(5.0), TickOutcome::Throttled);
    assert_eq!(scene.tick(20.0), TickOutcome::Draw);
    assert_eq!(scene.tick(40.0), TickOutcome::Frozen);
    assert_eq!(scene.tick(60.0), TickOutcome::Draw);
    assert_eq!(scene.frame().frames_drawn(), 2);
}

#[test]
fn wandering_enemies_keep_moving() {
    let mut scene = ready_scene(GameConfig::new());
    let request = scene.random_enemy_request();
    let entity = scene.spawn_creature(&request);
    let start = *scene.world().get::<MapPosition>(entity).unwrap();
    scene.start();

    run_ticks(&mut scene, 0.0, 30);
    let pos = *scene.world().get::<MapPosition>(entity).unwrap();
    assert_ne!(pos, start);
    let (min, max) = request.wander.unwrap();
    assert!(pos.pos.x >= min.x && pos.pos.x <= max.x);
    assert!(pos.pos.y >= min.y && pos.pos.y <= max.y);
}

// Individual systems on a bare world, without the compositor.

#[test]
fn parallax_system_sorts_by_zindex() {
    let mut world = World::new();
    world.insert_resource(FrameBuffer::new(800, 700));
    world.insert_resource(ScrollSpeed::new(10, 40));
    let mut store = TextureStore::new();
    store.mark_ready("near", LAYER);
    store.mark_ready("far", LAYER);
    world.insert_resource(store);

    world.spawn((ScrollingLayer::new("near", 2400.0, 700.0, 1.0), ZIndex(5)));
    world.spawn((ScrollingLayer::new("far", 2400.0, 700.0, 0.5), ZIndex(-5)));

    let mut schedule = Schedule::default();
    schedule.add_systems(parallax_layers);
    schedule.run(&mut world);

    let frame = world.resource::<FrameBuffer>();
    let dsts: Vec<(String, f32)> = frame
        .blits()
        .map(|(key, _, dst)| (key.to_string(), dst.x))
        .collect();
    assert_eq!(
        dsts,
        vec![
            ("far".to_string(), -5.0),
            ("far".to_string(), 2395.0),
            ("near".to_string(), -10.0),
            ("near".to_string(), 2390.0),
        ]
    );
}

#[test]
fn movement_system_parks_on_arrival() {
    use raylib::prelude::Vector2;

    let mut world = World::new();
    let entity = world
        .spawn((
            MapPosition::new(400.0, 300.0),
            Kinematic::new(Vector2 { x: 600.0, y: 300.0 }, Vector2 { x: 3.0, y: 3.0 }),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(kinematic_movement);
    for _ in 0..66 {
        schedule.run(&mut world);
    }
    assert_eq!(world.get::<MapPosition>(entity).unwrap().pos.x, 598.0);
    schedule.run(&mut world);
    schedule.run(&mut world);
    assert_eq!(
        *world.get::<MapPosition>(entity).unwrap(),
        MapPosition::new(600.0, 300.0)
    );
}
