use regex::Regex;

/// Split `text` into alternating heading/body segments using `heading` as the
/// delimiter. Whatever precedes the first heading match is dropped (front
/// matter with no heading of its own). Each heading segment is followed by the
/// body segment running up to the next match, so the result always alternates
/// heading, body, heading, body.
pub fn split_segments<'a>(text: &'a str, heading: &Regex) -> Vec<&'a str> {
    let matches: Vec<_> = heading.find_iter(text).collect();
    let mut segments = Vec::with_capacity(matches.len() * 2);

    for (i, m) in matches.iter().enumerate() {
        let body_end = matches.get(i + 1).map_or(text.len(), |next| next.start());
        segments.push(m.as_str());
        segments.push(&text[m.end()..body_end]);
    }

    segments
}

/// Group consecutive segments into (heading, body) pairs. An unpaired trailing
/// segment is dropped.
pub fn pair_segments<'a>(segments: &'a [&'a str]) -> impl Iterator<Item = (&'a str, &'a str)> {
    segments.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}

// ── Tests ──
