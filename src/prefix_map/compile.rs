use super::{AnchoredRegex, CompileError, Endpoint, PrefixMap};

use crate::pattern::{self, write_nodes_regex, Literal, Node};
use crate::strmap::StrMap;

use std::collections::HashMap;

use tracing::{debug, trace};

/// What the compiler does when two routes end up under the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The route declared last replaces the earlier one.
    #[default]
    Overwrite,
    /// Compilation fails with [`CompileError::Duplicate`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub duplicates: DuplicatePolicy,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}

impl<R> PrefixMap<R> {
    /// Compiles an ordered list of `(pattern, responder)` pairs.
    ///
    /// Declaration order is kept as the priority order between regex
    /// candidates at each level.
    pub fn from_flat_map<I, P>(routes: I) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
    {
        Self::from_flat_map_with(routes, CompileOptions::default())
    }

    pub fn from_flat_map_with<I, P>(routes: I, options: CompileOptions) -> Result<Self, CompileError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
    {
        let mut patterns: Vec<Box<str>> = Vec::new();
        let mut entries: Vec<Route<R>> = Vec::new();

        for (pattern, responder) in routes {
            let pattern = pattern.as_ref();
            let nodes = match pattern::parse(pattern) {
                Ok(seq) => seq.into_children(),
                Err(source) => {
                    return Err(CompileError::Parse {
                        pattern: pattern.to_owned(),
                        source,
                    })
                }
            };
            entries.push(Route {
                id: patterns.len(),
                nodes,
                responder,
            });
            patterns.push(pattern.into());
        }

        let compiler = Compiler {
            options,
            patterns: &patterns,
        };
        let map = compiler.build(entries)?;

        debug!(routes = patterns.len(), responders = map.len(), "compiled prefix map");
        Ok(map)
    }
}

struct Route<R> {
    id: usize,
    nodes: Vec<Node>,
    responder: R,
}

/// A route waiting to be grouped under `key`.
struct Keyed<R> {
    key: String,
    route: Route<R>,
}

struct Compiler<'p> {
    options: CompileOptions,
    patterns: &'p [Box<str>],
}

impl Compiler<'_> {
    fn pattern(&self, id: usize) -> String {
        self.patterns[id].to_string()
    }

    fn build<R>(&self, routes: Vec<Route<R>>) -> Result<PrefixMap<R>, CompileError> {
        let mut literals: StrMap<R> = StrMap::new();
        let mut prefixed: Vec<Keyed<R>> = Vec::new();
        let mut regexed: Vec<Keyed<R>> = Vec::new();

        for route in routes {
            let Route {
                id,
                nodes,
                responder,
            } = route;
            let mut iter = nodes.into_iter();

            let first = match iter.next() {
                Some(node) => node,
                None => {
                    self.insert_literal(&mut literals, "", id, responder)?;
                    continue;
                }
            };
            let rest: Vec<Node> = iter.collect();

            match first {
                Node::Literal(lit) if rest.is_empty() => {
                    self.insert_literal(&mut literals, lit.text(), id, responder)?;
                }
                Node::Literal(lit) => prefixed.push(Keyed {
                    key: lit.text().to_owned(),
                    route: Route {
                        id,
                        nodes: rest,
                        responder,
                    },
                }),
                Node::Parameter(param) if !param.is_constrained() && starts_with_slash(&rest) => {
                    let mut key = String::new();
                    param.write_regex(&mut key);
                    regexed.push(Keyed {
                        key,
                        route: Route {
                            id,
                            nodes: rest,
                            responder,
                        },
                    })
                }
                node => {
                    let mut key = node.to_regex();
                    write_nodes_regex(&rest, &mut key);
                    regexed.push(Keyed {
                        key,
                        route: Route {
                            id,
                            nodes: Vec::new(),
                            responder,
                        },
                    })
                }
            }
        }

        // demoted prefixes keep priority over the regexes of this level
        let (prefixes, prefix_length, mut demoted) = self.build_prefixes(prefixed)?;
        demoted.append(&mut regexed);
        let regexps = self.build_regexps(demoted)?;

        Ok(PrefixMap {
            literals,
            prefixes,
            prefix_length,
            regexps,
        })
    }

    /// Returns the prefix children, their key length, and the candidates
    /// that had to be demoted to regexes.
    fn build_prefixes<R>(
        &self,
        prefixed: Vec<Keyed<R>>,
    ) -> Result<(StrMap<PrefixMap<R>>, usize, Vec<Keyed<R>>), CompileError> {
        let by_key = group_ordered(prefixed);
        let mut demoted: Vec<Keyed<R>> = Vec::new();

        let len = match by_key.iter().map(|(k, _)| k.len()).min() {
            Some(len) => len,
            None => return Ok((StrMap::new(), 0, demoted)),
        };
        assert!(len != 0, "shouldn't have 0-length prefixes");

        let mut buckets: Vec<(String, Vec<Route<R>>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (key, routes) in by_key {
            // keys that can not be cut at `len` are matched as plain regexes
            if !key.is_char_boundary(len) {
                trace!(key = %key, len, "demoting literal prefix to regex");
                for route in routes {
                    let mut fragment = regex::escape(&key);
                    write_nodes_regex(&route.nodes, &mut fragment);
                    demoted.push(Keyed {
                        key: fragment,
                        route: Route {
                            nodes: Vec::new(),
                            ..route
                        },
                    });
                }
                continue;
            }

            let prefix = &key[..len];
            let i = *index.entry(prefix.to_owned()).or_insert_with(|| {
                buckets.push((prefix.to_owned(), Vec::new()));
                buckets.len() - 1
            });

            let suffix = Literal::new(&key[len..]);
            for mut route in routes {
                if let Some(ref lit) = suffix {
                    route.nodes.insert(0, lit.clone().into());
                }
                buckets[i].1.push(route);
            }
        }

        trace!(len, buckets = buckets.len(), "grouped literal prefixes");

        let mut prefixes = StrMap::new();
        for (prefix, routes) in buckets {
            let child = self.build(routes)?;
            prefixes.insert(&prefix, child);
        }

        Ok((prefixes, len, demoted))
    }

    fn build_regexps<R>(
        &self,
        regexed: Vec<Keyed<R>>,
    ) -> Result<Vec<(AnchoredRegex, Endpoint<R>)>, CompileError> {
        let mut regexps: Vec<(AnchoredRegex, Endpoint<R>)> = Vec::new();

        for (fragment, mut routes) in group_ordered(regexed) {
            let (fragment, id, endpoint) = if routes.len() == 1 {
                let Route {
                    id,
                    nodes,
                    responder,
                } = routes.remove(0);
                let mut full = fragment;
                write_nodes_regex(&nodes, &mut full);
                (full, id, Endpoint::Responder(responder))
            } else {
                let id = routes[0].id;
                (fragment, id, Endpoint::Map(self.build(routes)?))
            };

            let regex = AnchoredRegex::new(fragment.as_str()).map_err(|source| {
                CompileError::Regex {
                    pattern: self.pattern(id),
                    fragment: fragment.clone(),
                    source,
                }
            })?;

            match regexps.iter_mut().find(|(r, _)| *r == regex) {
                Some(slot) => {
                    self.on_duplicate(id)?;
                    slot.1 = endpoint;
                }
                None => regexps.push((regex, endpoint)),
            }
        }

        Ok(regexps)
    }

    fn insert_literal<R>(
        &self,
        literals: &mut StrMap<R>,
        key: &str,
        id: usize,
        responder: R,
    ) -> Result<(), CompileError> {
        if literals.contains_key(key) {
            self.on_duplicate(id)?;
        }
        literals.insert(key, responder);
        Ok(())
    }

    fn on_duplicate(&self, id: usize) -> Result<(), CompileError> {
        match self.options.duplicates {
            DuplicatePolicy::Overwrite => {
                debug!(pattern = %self.patterns[id], "route overwrites an earlier duplicate");
                Ok(())
            }
            DuplicatePolicy::Reject => Err(CompileError::Duplicate {
                pattern: self.pattern(id),
            }),
        }
    }
}

fn starts_with_slash(nodes: &[Node]) -> bool {
    match nodes.first() {
        Some(Node::Literal(lit)) => lit.text().starts_with('/'),
        _ => false,
    }
}

/// Groups by key, keeping the order in which keys first appear.
fn group_ordered<R>(items: Vec<Keyed<R>>) -> Vec<(String, Vec<Route<R>>)> {
    let mut groups: Vec<(String, Vec<Route<R>>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for Keyed { key, route } in items {
        match index.get(&key) {
            Some(&i) => groups[i].1.push(route),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![route]));
            }
        }
    }

    groups
}
