// Discrimination contract and candidate registry.

#[cfg(test)]
mod tests {
    use fshead_core::{
        constants::DEFAULT_MAGIC_NUM,
        head16, head32,
        protocol::{Protocol, ProtocolSet},
        HeaderError,
    };

    fn default_set() -> ProtocolSet {
        ProtocolSet::new()
            .with(Box::new(head16::Head::default()))
            .with(Box::new(head32::Head::default()))
    }

    fn wire16() -> [u8; 16] {
        head16::Head::new("demo", 3, 5).to_bytes()
    }

    fn wire32() -> [u8; 32] {
        head32::Head { version: 2, client_name: "demo".into(), log_id: 77, ..Default::default() }.to_bytes()
    }

    #[test]
    fn trait_lengths_match_variants() {
        let a: &dyn Protocol = &head16::Head::default();
        let b: &dyn Protocol = &head32::Head::default();

        assert_eq!(a.fixed_len(), Some(16));
        assert_eq!(a.discern_len(), 4);
        assert_eq!(b.fixed_len(), Some(32));
        assert_eq!(b.discern_len(), 32);
        assert_eq!(a.name(), "head16");
        assert_eq!(b.name(), "head32");

        for p in [a, b] {
            assert!(p.discern_len() <= p.fixed_len().unwrap());
            assert_eq!(p.to_bytes().len(), p.fixed_len().unwrap());
        }
    }

    #[test]
    fn trait_bytes_match_inherent_bytes() {
        let h = head16::Head::new("demo", 3, 5);
        assert_eq!(Protocol::to_bytes(&h), h.to_bytes().to_vec());
    }

    #[test]
    fn set_discern_lengths() {
        let set = default_set();
        assert_eq!(set.len(), 2);
        assert_eq!(set.discern_len(), 32);
        assert_eq!(set.min_discern_len(), 4);

        let empty = ProtocolSet::new();
        assert!(empty.is_empty());
        assert_eq!(empty.discern_len(), 0);
        assert_eq!(empty.discern(&wire16()), None);
    }

    #[test]
    fn discern_picks_matching_variant() {
        let set = default_set();
        assert_eq!(set.discern(&wire16()), Some(0));
        assert_eq!(set.discern(&wire16()[..4]), Some(0));
        assert_eq!(set.discern(&wire32()), Some(1));
    }

    #[test]
    fn discern_skips_candidates_needing_more_bytes() {
        let set = default_set();
        assert_eq!(set.discern(&wire32()[..31]), None);
        assert_eq!(set.discern(&[]), None);
        assert_eq!(set.discern(&wire16()[..3]), None);
    }

    #[test]
    fn discern_rejects_foreign_bytes() {
        let set = default_set();
        assert_eq!(set.discern(b"GET / HTTP/1.1\r\nHost: example\r\n\r\n"), None);
        assert_eq!(set.discern(&[0u8; 32]), None);
    }

    #[test]
    fn discern_respects_candidate_magic() {
        let set = ProtocolSet::new().with(Box::new(head16::Head::default().with_magic_num(1234)));
        let custom = head16::Head::new("a", 0, 0).with_magic_num(1234).to_bytes();
        assert_eq!(set.discern(&custom), Some(0));
        assert_eq!(set.discern(&wire16()), None);
    }

    #[test]
    fn load_through_trait_object() {
        let mut set = default_set();
        let wire = wire32();

        let index = set.discern(&wire).unwrap();
        let candidate = set.get_mut(index).unwrap();
        candidate.load(&wire).unwrap();

        let head = set.get(index).unwrap().as_any().downcast_ref::<head32::Head>().unwrap();
        assert_eq!(head.version, 2);
        assert_eq!(head.log_id, 77);
        assert_eq!(head.client_name, "demo");
        assert_eq!(head.magic_num, DEFAULT_MAGIC_NUM);
    }

    #[test]
    fn load_through_trait_object_reports_errors() {
        let mut set = default_set();
        let candidate = set.get_mut(0).unwrap();
        assert_eq!(
            candidate.load(&wire16()[..10]).unwrap_err(),
            HeaderError::LengthMismatch { have: 10, need: 16 }
        );
        assert!(set.get(0).unwrap().as_any().downcast_ref::<head16::Head>().unwrap() == &head16::Head::default());
        assert!(set.get(5).is_none());
    }

    #[test]
    fn set_load_decodes_into_candidate() {
        let mut set = default_set();
        let wire = wire32();

        let index = set.discern(&wire).unwrap();
        let loaded = set.load(index, &wire).unwrap().unwrap();
        assert_eq!(loaded.name(), "head32");

        let head = loaded.as_any().downcast_ref::<head32::Head>().unwrap();
        assert_eq!(head.version, 2);
        assert_eq!(head.log_id, 77);
        assert_eq!(head.client_name, "demo");

        // the candidate keeps the decoded value
        let kept = set.get(index).unwrap().as_any().downcast_ref::<head32::Head>().unwrap();
        assert_eq!(kept.log_id, 77);
    }

    #[test]
    fn set_load_reports_decode_errors() {
        let mut set = default_set();
        let err = set.load(0, &wire16()[..10]).unwrap().unwrap_err();
        assert_eq!(err, HeaderError::LengthMismatch { have: 10, need: 16 });

        let foreign = head16::Head::new("x", 0, 0).with_magic_num(99).to_bytes();
        let err = set.load(0, &foreign).unwrap().unwrap_err();
        assert_eq!(err, HeaderError::MagicNumMismatch { got: 99, want: 0 });

        let untouched = set.get(0).unwrap().as_any().downcast_ref::<head16::Head>().unwrap();
        assert_eq!(untouched, &head16::Head::default());
    }

    #[test]
    fn set_load_out_of_range_index() {
        let mut set = default_set();
        assert!(set.load(2, &wire16()).is_none());
        assert!(set.load(9, &wire32()).is_none());
        assert!(ProtocolSet::new().load(0, &wire16()).is_none());
    }

    #[test]
    fn iter_preserves_registration_order() {
        let names: Vec<_> = default_set().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["head16", "head32"]);
    }

    #[test]
    fn set_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ProtocolSet>();
        assert_send_sync::<head16::Head>();
        assert_send_sync::<head32::Head>();
    }
}
