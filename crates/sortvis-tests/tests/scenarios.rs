//! Literal step-by-step traces through the argument-free session API.

use sortvis_engine::{Bubble, Insertion, Session, Step, ACTIVE_SENTINEL};

#[test]
fn bubble_three_keys() {
    let mut bubble = Bubble::new();
    let mut keys = [3, 1, 2];
    let mut session = Session::bind(&mut bubble, &mut keys);
    assert_eq!(session.active_index(), Ok(0));
    assert_eq!(session.is_sorted(), Ok(false));

    // step 1: compare (3,1), swap, j = 1
    assert_eq!(session.step(), Ok(Step::Swap { left: 0, right: 1 }));
    assert_eq!(session.keys(), &[1, 3, 2]);
    assert_eq!(session.active_index(), Ok(1));

    // step 2: compare (3,2), swap, j = 2
    assert_eq!(session.step(), Ok(Step::Swap { left: 1, right: 2 }));
    assert_eq!(session.keys(), &[1, 2, 3]);
    assert_eq!(session.active_index(), Ok(2));

    // step 3: boundary reached, i = 1, j = 0
    assert_eq!(session.step(), Ok(Step::Advance));
    assert_eq!(session.active_index(), Ok(0));
    assert_eq!(session.is_sorted(), Ok(false));

    // step 4: compare (1,2), no swap, j = 1
    assert_eq!(session.step(), Ok(Step::Compare { left: 0, right: 1 }));
    assert_eq!(session.active_index(), Ok(1));
    assert_eq!(session.is_sorted(), Ok(false));

    // step 5: boundary reached, i = 2 >= size - 1
    assert_eq!(session.step(), Ok(Step::Advance));
    assert_eq!(session.is_sorted(), Ok(true));
    assert_eq!(session.keys(), &[1, 2, 3]);
}

#[test]
fn insertion_two_keys() {
    let mut insertion = Insertion::new();
    let mut keys = [2, 1];
    let mut session = Session::bind(&mut insertion, &mut keys);

    // step 1: capture key = 1, j = 0
    assert_eq!(session.step(), Ok(Step::Capture { at: 1 }));
    assert_eq!(session.keys(), &[2, 1]);
    assert_eq!(session.active_index(), Ok(0));

    // step 2: arr[0] = 2 > 1, shift into arr[1], j = -1
    assert_eq!(session.step(), Ok(Step::Shift { from: 0, to: 1 }));
    assert_eq!(session.keys(), &[2, 2]);
    assert_eq!(session.active_index(), Ok(ACTIVE_SENTINEL));
    assert_eq!(session.is_sorted(), Ok(false));

    // step 3: place key at arr[0], i = 2
    assert_eq!(session.step(), Ok(Step::Place { at: 0 }));
    assert_eq!(session.keys(), &[1, 2]);
    assert_eq!(session.is_sorted(), Ok(true));
}
