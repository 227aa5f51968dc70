//! Tests for provider response parsing.

use super::{ProviderError, ProviderKind};

mod ip4only {
    use super::*;

    #[test]
    fn takes_second_field() {
        let parsed = ProviderKind::Ip4Only.parse("US,1.2.3.4").unwrap();
        assert_eq!(parsed, "1.2.3.4");
    }

    #[test]
    fn takes_field_between_first_and_second_comma() {
        let raw = "IPv4,203.0.113.7,v1.1,,,See http://ip6.me/docs/ for api documentation";
        let parsed = ProviderKind::Ip4Only.parse(raw).unwrap();
        assert_eq!(parsed, "203.0.113.7");
    }

    #[test]
    fn empty_second_field_is_returned_as_is() {
        assert_eq!(ProviderKind::Ip4Only.parse("US,").unwrap(), "");
        assert_eq!(ProviderKind::Ip4Only.parse(",,x").unwrap(), "");
    }

    #[test]
    fn field_is_not_trimmed() {
        let parsed = ProviderKind::Ip4Only.parse("US, 1.2.3.4 ,x").unwrap();
        assert_eq!(parsed, " 1.2.3.4 ");
    }

    #[test]
    fn missing_comma_is_unparsable() {
        let err = ProviderKind::Ip4Only.parse("nocommahere").unwrap_err();

        assert!(matches!(
            &err,
            ProviderError::Unparsable { body, .. } if body == "nocommahere"
        ));
        assert_eq!(
            err.to_string(),
            "Got unparsable response nocommahere from http://ip4only.me/api"
        );
    }

    #[test]
    fn empty_body_is_unparsable() {
        assert!(ProviderKind::Ip4Only.parse("").is_err());
    }
}

mod identity {
    use super::*;

    #[test]
    fn whatismyip_returns_body() {
        let parsed = ProviderKind::WhatIsMyIp.parse("1.2.3.4").unwrap();
        assert_eq!(parsed, "1.2.3.4");
    }

    #[test]
    fn ipify_returns_body() {
        let parsed = ProviderKind::Ipify.parse("1.2.3.4").unwrap();
        assert_eq!(parsed, "1.2.3.4");
    }

    #[test]
    fn malformed_and_empty_bodies_pass_through() {
        for raw in ["", "not an ip", "US,1.2.3.4", "<html>oops</html>", "1.2.3.4\n"] {
            assert_eq!(ProviderKind::WhatIsMyIp.parse(raw).unwrap(), raw);
            assert_eq!(ProviderKind::Ipify.parse(raw).unwrap(), raw);
        }
    }
}

mod metadata {
    use super::*;

    #[test]
    fn all_is_in_query_order() {
        assert_eq!(
            ProviderKind::ALL,
            [
                ProviderKind::Ip4Only,
                ProviderKind::WhatIsMyIp,
                ProviderKind::Ipify
            ]
        );
    }

    #[test]
    fn endpoints_are_valid_urls() {
        for kind in ProviderKind::ALL {
            assert!(url::Url::parse(kind.endpoint()).is_ok(), "{kind}");
        }
    }

    #[test]
    fn display_uses_short_name() {
        assert_eq!(ProviderKind::Ip4Only.to_string(), "ip4only");
        assert_eq!(ProviderKind::WhatIsMyIp.to_string(), "whatismyip");
        assert_eq!(ProviderKind::Ipify.to_string(), "ipify");
    }
}
