mod tests {
    use strip_director::effect::{EffectKind, EffectSlot};
    use strip_director::presets::{CHRISTMAS_EFFECTS, christmas};
    use strip_director::{Rng, StripConfig};

    const STRIP: StripConfig = StripConfig::new(288, 10, 15);

    #[test]
    fn test_christmas_rotation() {
        let mut rng = Rng::with_seed(2023);
        let effects = christmas::<308>(&STRIP, &mut rng);
        assert_eq!(effects.len(), CHRISTMAS_EFFECTS);

        let count = |kind: EffectKind| effects.iter().filter(|slot| slot.kind() == kind).count();
        assert_eq!(count(EffectKind::Trains), 4);
        assert_eq!(count(EffectKind::Stripes), 4);
        assert_eq!(count(EffectKind::Rain), 4);
        assert_eq!(count(EffectKind::Stars), 3);

        for slot in &effects {
            assert_eq!(slot.frame().len(), 308);
            assert_eq!(slot.frame().visible_len(), 288);
            if let EffectSlot::Stars(stars) = slot {
                assert!((10..=25).contains(&stars.config().count));
            }
        }

        assert_eq!(
            effects[0].to_string(),
            "Trains(colors=[0x0000ff, 0xffffff, 0x00ffff])"
        );
        assert_eq!(effects[4].to_string(), "Stripes(0xffffff, 0x0000ff)");
    }
}
