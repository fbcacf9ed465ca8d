mod common;

mod tests {
    use strip_director::color::{BLACK, RED, WHITE};
    use strip_director::effect::{
        EffectKind, EffectSlot, StripesConfig, StripesEffect, Train, TrainsConfig, TrainsEffect,
    };
    use strip_director::{Duration, EffectState, Rng, StripConfig};

    use super::common::RecordingDriver;

    const STRIP: StripConfig = StripConfig::new(10, 4, 255);

    #[test]
    fn test_kind_matches_variant() {
        let config = StripesConfig::new(RED, WHITE);
        let slot = EffectSlot::<32>::from(StripesEffect::new(&STRIP, config));
        assert_eq!(slot.kind(), EffectKind::Stripes);
        assert_eq!(slot.population(), 0);
    }

    #[test]
    fn test_cycle_flushes_before_advancing() {
        let mut rng = Rng::with_seed(0);
        let config = TrainsConfig {
            spawn_chance_pct: 0,
            ..TrainsConfig::new(&[RED])
        };
        let mut effect = TrainsEffect::<32>::new(&STRIP, config);
        effect.spawn(Train::new(WHITE, 4, 1.0, 8.0)).unwrap();
        let mut slot = EffectSlot::from(effect);
        assert_eq!(slot.kind(), EffectKind::Trains);
        assert_eq!(slot.state(), EffectState::Uninitialized);

        let mut driver = RecordingDriver::default();
        let wait = slot.cycle(&mut driver, &mut rng);
        assert_eq!(wait, Duration::from_millis(0));

        // Cell 8 is the center of the train at the time of the flush
        let frame = driver.last();
        assert_eq!(frame.len(), 10);
        assert_eq!(frame[8 - 4], WHITE);
        assert_eq!(frame[9 - 4], WHITE.scale(63));
        assert_eq!(frame[6 - 4], BLACK);

        let EffectSlot::Trains(effect) = &slot else {
            panic!("slot changed kind");
        };
        assert_eq!(effect.trains()[0].pos(), 9.0);
        assert_eq!(slot.population(), 1);
    }

    #[test]
    fn test_slot_lifecycle() {
        let mut rng = Rng::with_seed(0);
        let mut slot = EffectSlot::from(TrainsEffect::<32>::new(&STRIP, TrainsConfig::new(&[RED])));

        slot.reinit(&mut rng);
        assert_eq!(slot.state(), EffectState::Active);
        assert!(slot.is_finished());

        slot.set_expired();
        assert_eq!(slot.state(), EffectState::Finished);
        assert_eq!(slot.to_string(), "Trains(colors=[0xff0000])");
    }
}
