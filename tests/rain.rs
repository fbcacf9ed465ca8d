mod tests {
    use strip_director::color::{BLACK, CYAN, Color, WHITE};
    use strip_director::effect::{Effect, EffectState, RainConfig, RainDrop, RainEffect};
    use strip_director::{Duration, Rng, StripConfig};

    const PALETTE: &[Color] = &[CYAN, WHITE];
    const STRIP: StripConfig = StripConfig::new(40, 5, 255);

    fn config(spawn_chance_pct: u8) -> RainConfig {
        RainConfig {
            spawn_chance_pct,
            ..RainConfig::new(PALETTE)
        }
    }

    #[test]
    fn test_drop_grows_then_shrinks() {
        let mut drop = RainDrop::new(10, WHITE, 4);
        assert_eq!(drop.current_size(), 0);
        assert_eq!(drop.target_size(), 4);
        assert!(!drop.finished());

        let mut sizes = Vec::new();
        while !drop.finished() {
            drop.advance();
            sizes.push(drop.current_size());
        }
        assert_eq!(sizes, vec![1, 2, 3, 4, 3, 2, 1, 0]);
        assert_eq!(drop.target_size(), 0);
    }

    #[test]
    fn test_color_at_offset() {
        let mut drop = RainDrop::new(10, WHITE, 4);
        drop.advance();
        drop.advance();
        // (2 / 4)^2 and (1 / 4)^2 of full intensity
        assert_eq!(drop.color_at_offset(0), WHITE.scale(63));
        assert_eq!(drop.color_at_offset(1), WHITE.scale(15));
        assert_eq!(drop.color_at_offset(2), BLACK);
    }

    #[test]
    fn test_render_radiates_from_center() {
        let mut rng = Rng::with_seed(0);
        let mut effect = RainEffect::<64>::new(&STRIP, config(0));
        effect.reinit(&mut rng);
        effect.spawn(RainDrop::new(20, WHITE, 4)).unwrap();
        effect.advance(&mut rng);
        effect.advance(&mut rng);
        effect.render();

        let frame = effect.frame();
        assert_eq!(frame.get(20), WHITE.scale(63));
        assert_eq!(frame.get(19), WHITE.scale(15));
        assert_eq!(frame.get(21), WHITE.scale(15));
        assert_eq!(frame.get(18), BLACK);
        assert_eq!(frame.get(22), BLACK);
    }

    #[test]
    fn test_render_clips_at_window_edges() {
        let mut rng = Rng::with_seed(0);
        let mut effect = RainEffect::<64>::new(&STRIP, config(0));
        effect.reinit(&mut rng);
        let (min, max) = (effect.frame().min(), effect.frame().max());
        effect.spawn(RainDrop::new(min, WHITE, 6)).unwrap();
        effect.spawn(RainDrop::new(max - 1, CYAN, 6)).unwrap();
        for _ in 0..5 {
            effect.advance(&mut rng);
        }
        effect.render();

        let frame = effect.frame();
        assert!(frame.cells()[..min].iter().all(|cell| cell.is_black()));
        assert!(frame.cells()[max..].iter().all(|cell| cell.is_black()));
        assert!(!frame.get(min).is_black());
        assert!(!frame.get(max - 1).is_black());
    }

    #[test]
    fn test_spawned_drops_stay_in_window() {
        let mut rng = Rng::with_seed(9);
        let mut effect = RainEffect::<64>::new(&STRIP, config(100));
        effect.reinit(&mut rng);
        assert!(effect.drops().is_empty());

        for _ in 0..200 {
            effect.advance(&mut rng);
            assert!(effect.drops().len() <= 8);
            for drop in effect.drops() {
                assert!((5..45).contains(&drop.pos()));
                assert!((5..=12).contains(&drop.max_size()));
                assert!(PALETTE.contains(&drop.color()));
            }
        }
    }

    #[test]
    fn test_expired_rain_drains() {
        let mut rng = Rng::with_seed(3);
        let mut effect = RainEffect::<64>::new(&STRIP, config(100));
        effect.reinit(&mut rng);
        for _ in 0..10 {
            effect.advance(&mut rng);
        }
        assert!(!effect.is_finished());

        effect.set_expired();
        assert_eq!(effect.state(), EffectState::Expiring);

        let mut population = effect.drops().len();
        let mut frames = 0;
        while !effect.is_finished() {
            effect.advance(&mut rng);
            assert!(effect.drops().len() <= population);
            population = effect.drops().len();
            frames += 1;
        }
        // No drop lives longer than twice its largest size
        assert!(frames <= 24);
        assert_eq!(effect.state(), EffectState::Finished);

        effect.reinit(&mut rng);
        assert_eq!(effect.state(), EffectState::Active);
        assert!(effect.drops().is_empty());
    }

    #[test]
    fn test_wait() {
        let effect = RainEffect::<64>::new(&STRIP, config(15));
        assert_eq!(effect.wait(), Duration::from_millis(20));
    }
}
