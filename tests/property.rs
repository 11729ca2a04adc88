use eip191_textual::signing::{personal_message, ETH_MESSAGE_PREFIX};
use eip191_textual::{
    Eip191TextualHandler, Screen, SignContext, SignDocument, SignMode, SignModeHandler, SignerData,
    TxData,
};
use proptest::prelude::*;
use std::sync::Arc;

fn any_screen() -> impl Strategy<Value = Screen> {
    (
        "[a-zA-Z0-9 éü✓]{0,12}",
        "[a-zA-Z0-9 .:éü✓世界]{0,24}",
        0u32..4,
        any::<bool>(),
    )
        .prop_map(|(title, content, indent, expert)| Screen {
            title,
            content,
            indent,
            expert,
        })
}

fn render(doc: &SignDocument) -> Vec<u8> {
    let handler = Eip191TextualHandler::new(Arc::new(eip191_textual::signing::PrerenderedTextualHandler));
    handler
        .get_sign_bytes(
            &SignContext::default(),
            &SignerData::default(),
            &TxData::with_textual_sign_doc(doc.to_cbor().expect("encode sign doc")),
        )
        .expect("render sign doc")
}

proptest! {
    #[test]
    fn envelope_prefixes_byte_length(message in ".{0,64}") {
        let envelope = personal_message(message.as_bytes());
        let mut expected = ETH_MESSAGE_PREFIX.as_bytes().to_vec();
        expected.extend_from_slice(message.len().to_string().as_bytes());
        expected.extend_from_slice(message.as_bytes());
        prop_assert_eq!(envelope, expected);
    }

    #[test]
    fn rendering_keeps_one_line_per_screen(screens in prop::collection::vec(any_screen(), 1..8)) {
        let doc = SignDocument::new(screens.clone());
        let sign_bytes = render(&doc);

        let plaintext = doc.plaintext();
        let header = format!("{}{}", ETH_MESSAGE_PREFIX, plaintext.len());
        prop_assert!(sign_bytes.starts_with(header.as_bytes()));
        prop_assert_eq!(&sign_bytes[header.len()..], plaintext.as_bytes());

        let lines: Vec<&str> = plaintext.split('\n').collect();
        prop_assert_eq!(lines.len(), screens.len());
        for (line, screen) in lines.iter().zip(&screens) {
            prop_assert_eq!(line.starts_with('*'), screen.expert);
            prop_assert!(line.ends_with(screen.content.as_str()));
        }
    }

    #[test]
    fn rendering_is_deterministic(screens in prop::collection::vec(any_screen(), 0..6)) {
        let doc = SignDocument::new(screens);
        prop_assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = SignDocument::from_cbor(&bytes);
    }

    #[test]
    fn non_textual_modes_are_rejected(bytes in prop::collection::vec(any::<u8>(), 0..16)) {
        let handler = Eip191TextualHandler::new(Arc::new(eip191_textual::signing::PrerenderedTextualHandler));
        for mode in [SignMode::Direct, SignMode::DirectAux, SignMode::LegacyAminoJson, SignMode::Eip191] {
            prop_assert!(handler.render(mode, &bytes).is_err());
        }
    }
}
