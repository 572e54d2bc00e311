use ringlist::{Entry, Error, MediaKind, NodeId, Playlist};

fn build(names: &[&str]) -> (Playlist, Vec<NodeId>) {
    let mut playlist = Playlist::new();
    let ids = names
        .iter()
        .map(|name| playlist.add(*name, format!("blob:{name}")))
        .collect();
    (playlist, ids)
}

fn names(playlist: &Playlist) -> Vec<String> {
    playlist
        .iter()
        .map(|(_, entry)| entry.display_name().to_string())
        .collect()
}

/// Suit `next` (ou `prev`) `len` fois depuis chaque nœud
fn assert_circular(playlist: &Playlist) {
    let ids: Vec<NodeId> = playlist.iter().map(|(id, _)| id).collect();
    assert_eq!(ids.len(), playlist.len());

    for &start in &ids {
        let mut forward = start;
        let mut backward = start;
        for _ in 0..playlist.len() {
            forward = playlist.next(forward).unwrap();
            backward = playlist.prev(backward).unwrap();
        }
        assert_eq!(forward, start);
        assert_eq!(backward, start);

        let next = playlist.next(start).unwrap();
        let prev = playlist.prev(start).unwrap();
        assert_eq!(playlist.prev(next), Some(start));
        assert_eq!(playlist.next(prev), Some(start));
    }
    playlist.verify().unwrap();
}

#[test]
fn test_empty_playlist() {
    let playlist = Playlist::new();
    assert!(playlist.is_empty());
    assert_eq!(playlist.len(), 0);
    assert_eq!(playlist.head(), None);
    assert_eq!(playlist.tail(), None);
    assert_eq!(playlist.get(0), None);
    assert_eq!(playlist.iter().count(), 0);
    playlist.verify().unwrap();
}

#[test]
fn test_add_appends_before_head() {
    let (playlist, ids) = build(&["a.mp3", "b.mp4", "c.mp3"]);

    assert_eq!(names(&playlist), ["a.mp3", "b.mp4", "c.mp3"]);
    assert_eq!(playlist.head(), Some(ids[0]));
    assert_eq!(playlist.tail(), Some(ids[2]));
    assert_eq!(playlist.next(ids[2]), Some(ids[0]));
    assert_eq!(playlist.prev(ids[0]), Some(ids[2]));
    assert_circular(&playlist);
}

#[test]
fn test_add_then_get() {
    let mut playlist = Playlist::new();
    for k in 0..8 {
        let id = playlist.add(format!("track{k}.mp3"), format!("blob:{k}"));
        assert_eq!(playlist.get(k), Some(id));
        assert_eq!(playlist.len(), k + 1);
        assert_circular(&playlist);
    }
}

#[test]
fn test_get_out_of_range() {
    let (playlist, _) = build(&["a.mp3", "b.mp3"]);
    assert!(playlist.get(1).is_some());
    assert_eq!(playlist.get(2), None);
    assert_eq!(playlist.get(usize::MAX), None);
}

#[test]
fn test_delete_preserves_order() {
    let all = ["e0", "e1", "e2", "e3", "e4"];
    for i in 0..all.len() {
        let (mut playlist, _) = build(&all);
        let node = playlist.get(i).unwrap();
        let removed = playlist.remove(node).unwrap();
        assert_eq!(removed.display_name(), all[i]);

        let expected: Vec<&str> = all
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, name)| *name)
            .collect();
        assert_eq!(names(&playlist), expected);
        assert_eq!(playlist.len(), all.len() - 1);
        assert_circular(&playlist);
    }
}

#[test]
fn test_delete_head_moves_head_to_next() {
    let (mut playlist, ids) = build(&["a.mp3", "b.mp3", "c.mp3"]);
    playlist.remove(ids[0]).unwrap();

    assert_eq!(playlist.head(), Some(ids[1]));
    assert_eq!(playlist.tail(), Some(ids[2]));
    assert_circular(&playlist);
}

#[test]
fn test_single_element_delete() {
    let (mut playlist, ids) = build(&["only.mp3"]);
    let entry = playlist.remove(ids[0]).unwrap();

    assert_eq!(entry.display_name(), "only.mp3");
    assert_eq!(playlist.len(), 0);
    assert_eq!(playlist.head(), None);
    assert_eq!(playlist.get(0), None);
    playlist.verify().unwrap();
}

#[test]
fn test_stale_handle_is_rejected() {
    let (mut playlist, ids) = build(&["a.mp3", "b.mp3", "c.mp3"]);
    playlist.remove(ids[1]).unwrap();

    assert_eq!(playlist.remove(ids[1]), Err(Error::InvalidHandle(ids[1])));
    assert_eq!(playlist.entry(ids[1]), None);
    assert_eq!(playlist.next(ids[1]), None);
    assert_eq!(playlist.index_of(ids[1]), None);
    assert_eq!(
        playlist.swap_entries(ids[0], ids[1]),
        Err(Error::InvalidHandle(ids[1]))
    );

    assert_eq!(names(&playlist), ["a.mp3", "c.mp3"]);
    assert_eq!(playlist.len(), 2);
    assert_circular(&playlist);
}

#[test]
fn test_handle_outside_arena_is_rejected() {
    let (mut first, _) = build(&["a.mp3"]);
    let (_, other_ids) = build(&["x.mp3", "y.mp3", "z.mp3"]);

    assert_eq!(
        first.remove(other_ids[2]),
        Err(Error::InvalidHandle(other_ids[2]))
    );
    assert_eq!(first.len(), 1);
    first.verify().unwrap();
}

#[test]
fn test_foreign_handle_on_live_slot_is_rejected() {
    let (mut mine, mine_ids) = build(&["a.mp3", "b.mp3", "c.mp3"]);
    let (mut other, _) = build(&["x.mp3"]);
    let foreign = other.add("y.mp3", "blob:y");

    // Même slot et même génération qu'un nœud vivant de `mine`
    assert_eq!(format!("{foreign}"), format!("{}", mine_ids[1]));
    assert_ne!(foreign, mine_ids[1]);

    assert!(!mine.contains(foreign));
    assert_eq!(mine.remove(foreign), Err(Error::InvalidHandle(foreign)));
    assert_eq!(
        mine.swap_entries(mine_ids[0], foreign),
        Err(Error::InvalidHandle(foreign))
    );
    assert_eq!(mine.next(foreign), None);
    assert_eq!(mine.prev(foreign), None);
    assert!(mine.entry(foreign).is_none());
    assert!(mine.entry_mut(foreign).is_none());
    assert_eq!(mine.index_of(foreign), None);
    assert_eq!(mine.iter_from(foreign, 3).count(), 0);

    assert_eq!(names(&mine), ["a.mp3", "b.mp3", "c.mp3"]);
    assert_circular(&mine);

    // Le handle reste valide pour la playlist qui l'a émis
    let removed = other.remove(foreign).unwrap();
    assert_eq!(removed.display_name(), "y.mp3");
    assert_eq!(names(&other), ["x.mp3"]);
}

#[test]
fn test_swap_entries_keeps_links() {
    let (mut playlist, ids) = build(&["a.mp3", "b.mp4", "c.mp3"]);
    playlist.swap_entries(ids[0], ids[1]).unwrap();

    assert_eq!(names(&playlist), ["b.mp4", "a.mp3", "c.mp3"]);
    assert_eq!(playlist.head(), Some(ids[0]));
    assert_eq!(playlist.next(ids[0]), Some(ids[1]));
    // Le type de média suit le contenu échangé
    assert_eq!(playlist.entry(ids[0]).unwrap().kind(), MediaKind::Video);
    assert_circular(&playlist);

    playlist.swap_entries(ids[2], ids[2]).unwrap();
    assert_eq!(names(&playlist), ["b.mp4", "a.mp3", "c.mp3"]);
}

#[test]
fn test_iter_from_is_rotated_and_capped() {
    let (playlist, ids) = build(&["a", "b", "c", "d"]);

    let rotated: Vec<&str> = playlist
        .iter_from(ids[2], 10)
        .map(|(_, e)| e.display_name())
        .collect();
    assert_eq!(rotated, ["c", "d", "a", "b"]);

    let partial: Vec<&str> = playlist
        .iter_from(ids[3], 2)
        .map(|(_, e)| e.display_name())
        .collect();
    assert_eq!(partial, ["d", "a"]);

    assert_eq!(playlist.iter_from(ids[0], 0).count(), 0);
}

#[test]
fn test_iter_from_stale_handle_is_empty() {
    let (mut playlist, ids) = build(&["a", "b"]);
    playlist.remove(ids[0]).unwrap();
    assert_eq!(playlist.iter_from(ids[0], 5).count(), 0);
}

#[test]
fn test_index_of() {
    let (playlist, ids) = build(&["a", "b", "c"]);
    for (i, id) in ids.iter().enumerate() {
        assert_eq!(playlist.index_of(*id), Some(i));
    }
}

#[test]
fn test_entry_mut() {
    let (mut playlist, ids) = build(&["a.mp3"]);
    *playlist.entry_mut(ids[0]).unwrap() = Entry::new("renamed.mp4", "blob:r");
    assert!(playlist.entry(ids[0]).unwrap().is_video());
}

#[test]
fn test_mixed_mutations_keep_invariants() {
    let mut playlist = Playlist::new();
    let mut live = Vec::new();

    for round in 0..20 {
        live.push(playlist.add(format!("t{round}"), format!("blob:{round}")));
        if round % 3 == 2 {
            let victim = live.remove(round % live.len());
            playlist.remove(victim).unwrap();
        }
        if live.len() >= 2 {
            playlist.swap_entries(live[0], live[live.len() - 1]).unwrap();
        }
        assert_eq!(playlist.len(), live.len());
        assert_circular(&playlist);
    }
}

#[test]
fn test_collect_and_serialize_entries() {
    let playlist: Playlist = vec![Entry::new("a.mp3", "blob:a"), Entry::new("b.mp4", "blob:b")]
        .into_iter()
        .collect();

    let entries: Vec<&Entry> = (&playlist).into_iter().map(|(_, e)| e).collect();
    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(json[1]["display_name"], "b.mp4");
    assert_eq!(json[1]["kind"], "video");
    assert_eq!(json[0]["source_locator"], "blob:a");
}
