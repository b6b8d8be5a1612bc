use super::*;

const PHRASES: [&str; 3] = ["Frontend Developer", "Programmer", "Freelancer"];

fn stock() -> Typewriter {
    Typewriter::new(PHRASES, TypingTiming::default()).unwrap()
}

#[test]
fn empty_phrase_list_is_rejected() {
    assert!(Typewriter::new(Vec::<String>::new(), TypingTiming::default()).is_none());
}

#[test]
fn first_tick_types_one_character() {
    let mut tw = stock();
    let tick = tw.tick();
    assert_eq!(tick.text, "F");
    assert_eq!(tick.delay_ms, 100);
    assert!(!tw.is_deleting());
}

#[test]
fn switches_to_deleting_exactly_at_full_length() {
    let mut tw = stock();
    for _ in 0..17 {
        let tick = tw.tick();
        assert_eq!(tick.delay_ms, 100);
        assert!(!tw.is_deleting());
    }
    let tick = tw.tick();
    assert_eq!(tick.text, "Frontend Developer");
    assert_eq!(tick.delay_ms, 2000);
    assert!(tw.is_deleting());
    assert_eq!(tw.char_index(), 18);
}

#[test]
fn advances_phrase_exactly_at_zero_length() {
    let mut tw = stock();
    for _ in 0..18 {
        tw.tick();
    }
    for _ in 0..17 {
        let tick = tw.tick();
        assert_eq!(tick.delay_ms, 50);
        assert_eq!(tw.phrase_index(), 0);
    }
    let tick = tw.tick();
    assert_eq!(tick.text, "");
    assert_eq!(tick.delay_ms, 500);
    assert_eq!(tw.phrase_index(), 1);
    assert!(!tw.is_deleting());

    assert_eq!(tw.tick().text, "P");
}

#[test]
fn hundred_ticks_from_fresh_start() {
    // 36 ticks per pass of phrase 0, 20 each for phrases 1 and 2: ticks
    // 77..=94 retype phrase 0 and the last six delete from its end.
    let mut tw = stock();
    let mut elapsed: u64 = 0;
    let mut last = None;
    for _ in 0..100 {
        let tick = tw.tick();
        elapsed += u64::from(tick.delay_ms);
        last = Some(tick);
    }
    let last = last.unwrap();
    assert_eq!(last.text, "Frontend Dev");
    assert_eq!(tw.phrase_index(), 0);
    assert_eq!(tw.char_index(), 12);
    assert!(tw.is_deleting());

    // Three full passes plus 17 typing steps, the full hold, and 6 deletes.
    let pass = |len: u64| (len - 1) * 100 + 2000 + (len - 1) * 50 + 500;
    let expected = pass(18) + pass(10) + pass(10) + 17 * 100 + 2000 + 6 * 50;
    assert_eq!(elapsed, expected);
}

#[test]
fn char_index_stays_within_phrase() {
    let mut tw = stock();
    for _ in 0..500 {
        tw.tick();
        let len = PHRASES[tw.phrase_index()].chars().count();
        assert!(tw.char_index() <= len);
    }
}

#[test]
fn counts_characters_not_bytes() {
    let mut tw = Typewriter::new(["héllo"], TypingTiming::default()).unwrap();
    assert_eq!(tw.tick().text, "h");
    assert_eq!(tw.tick().text, "hé");
    assert_eq!(tw.tick().text, "hél");
}

#[test]
fn empty_phrase_does_not_stall_the_loop() {
    let mut tw = Typewriter::new(["", "ab"], TypingTiming::default()).unwrap();
    let tick = tw.tick();
    assert_eq!(tick.text, "");
    assert_eq!(tick.delay_ms, 2000);
    let tick = tw.tick();
    assert_eq!(tick.delay_ms, 500);
    assert_eq!(tw.phrase_index(), 1);
    assert_eq!(tw.tick().text, "a");
}

#[test]
fn single_phrase_wraps_to_itself() {
    let mut tw = Typewriter::new(["ab"], TypingTiming::default()).unwrap();
    let texts: Vec<String> = (0..5).map(|_| tw.tick().text).collect();
    assert_eq!(texts, vec!["a", "ab", "a", "", "a"]);
}
