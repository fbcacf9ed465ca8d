mod tests {
    use strip_director::color::{BLACK, BLUE, Color, WHITE, YELLOW};
    use strip_director::effect::{
        Effect, EffectState, STAR_LUMA_DELTA, STAR_MAX_LUMA, STAR_MIN_LUMA, Star, StarsConfig,
        StarsEffect,
    };
    use strip_director::{Duration, Rng, StripConfig};

    const PALETTE: &[Color] = &[YELLOW, WHITE];
    const STRIP: StripConfig = StripConfig::new(50, 4, 255);

    #[test]
    fn test_twinkle_bounces_between_limits() {
        let mut star = Star::new(10, WHITE, 180);
        assert_eq!(star.luma_delta(), STAR_LUMA_DELTA);

        star.twinkle();
        assert_eq!(star.luma(), STAR_MAX_LUMA);
        assert_eq!(star.luma_delta(), -STAR_LUMA_DELTA);

        star.twinkle();
        assert_eq!(star.luma(), STAR_MAX_LUMA - 16);

        let mut reversals = 0;
        let mut delta = star.luma_delta();
        for _ in 0..200 {
            star.twinkle();
            assert!((STAR_MIN_LUMA..=STAR_MAX_LUMA).contains(&star.luma()));
            if star.luma_delta() != delta {
                reversals += 1;
                delta = star.luma_delta();
            }
        }
        assert!(reversals >= 10);
    }

    #[test]
    fn test_star_color_follows_luma() {
        let star = Star::new(3, BLUE, 100);
        assert_eq!(star.color(), BLUE.scale(100));
        assert_eq!(Star::new(3, BLUE, 0).color(), BLACK);
    }

    #[test]
    fn test_reinit_places_fixed_population() {
        let mut rng = Rng::with_seed(21);
        let mut effect = StarsEffect::<64>::new(&STRIP, StarsConfig::new(PALETTE, 12));
        assert!(effect.stars().is_empty());

        for _ in 0..3 {
            effect.reinit(&mut rng);
            assert_eq!(effect.stars().len(), 12);
            for star in effect.stars() {
                assert!((4..54).contains(&star.pos()));
                assert!(star.luma() < STAR_MAX_LUMA);
                assert_eq!(star.luma_delta(), STAR_LUMA_DELTA);
            }

            for _ in 0..50 {
                effect.advance(&mut rng);
            }
            assert_eq!(effect.stars().len(), 12);
        }
    }

    #[test]
    fn test_render_lights_only_star_cells() {
        let mut rng = Rng::with_seed(2);
        let mut effect = StarsEffect::<64>::new(&STRIP, StarsConfig::new(PALETTE, 5));
        effect.reinit(&mut rng);
        effect.advance(&mut rng);
        effect.render();

        let frame = effect.frame();
        for (i, cell) in frame.cells().iter().enumerate() {
            let expected = effect
                .stars()
                .iter()
                .filter(|star| star.pos() == i)
                .fold(BLACK, |acc, star| acc | star.color());
            assert_eq!(*cell, expected, "cell {i}");
        }
    }

    #[test]
    fn test_no_drain_phase() {
        let mut rng = Rng::with_seed(0);
        let mut effect = StarsEffect::<64>::new(&STRIP, StarsConfig::new(PALETTE, 10));
        effect.reinit(&mut rng);
        assert_eq!(effect.state(), EffectState::Active);
        assert!(effect.is_finished());

        effect.set_expired();
        assert_eq!(effect.state(), EffectState::Finished);
        assert_eq!(effect.stars().len(), 10);
        assert_eq!(effect.wait(), Duration::from_millis(50));

        effect.reinit(&mut rng);
        assert_eq!(effect.state(), EffectState::Active);
    }

    #[test]
    #[should_panic(expected = "at most")]
    fn test_too_many_stars_panics() {
        let _ = StarsEffect::<64>::new(&STRIP, StarsConfig::new(PALETTE, 33));
    }

    #[test]
    fn test_display() {
        let effect = StarsEffect::<64>::new(&STRIP, StarsConfig::new(&[WHITE], 10));
        assert_eq!(effect.to_string(), "Stars(colors=[0xffffff], num_stars=10)");
    }
}
