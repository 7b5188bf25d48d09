use crate::config::{Config, Relation};
use crate::schema::{Model, Name};
use crate::Result;

use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyPair {
    pub(crate) from: String,
    pub(crate) to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RelationKind {
    BelongsTo,
    HasMany,
    ManyToMany {
        /// Table name of the junction
        junction: String,

        /// Junction key to target key
        junction_keys: KeyPair,
    },
}

/// A relationship accessor to generate on a table.
#[derive(Debug)]
pub(crate) struct Accessor {
    pub(crate) name: Name,
    pub(crate) kind: RelationKind,

    /// Model name of the related table
    pub(crate) target: String,

    /// Base key to target key; for many-to-many, base key to junction key
    pub(crate) keys: KeyPair,
}

impl Accessor {
    pub(crate) fn is_many_to_many(&self) -> bool {
        matches!(self.kind, RelationKind::ManyToMany { .. })
    }
}

/// Accessors to generate, by model name.
pub(crate) type Accessors = IndexMap<String, Vec<Accessor>>;

/// Derives every accessor from the declared relations:
///
/// * each relation is a belongs-to on the declaring table;
/// * a relation with a reverse name adds a has-many on its target, keys
///   swapped;
/// * a junction `(r1, r2)` adds `r1.reverse_name` on `r1.target` towards
///   `r2.target`, and the symmetric accessor for `r2`.
///
/// Keys are resolved to column names.
pub(crate) fn derive(config: &Config, models: &IndexMap<String, Model>) -> Result<Accessors> {
    let mut accessors = Accessors::new();

    for model in models.keys() {
        accessors.insert(model.clone(), vec![]);
    }

    for table in &config.tables {
        let model = &table.schema.model;

        for relation in &table.relations {
            let keys = resolve(models, model, relation);

            accessors.entry(model.clone()).or_default().push(Accessor {
                name: Name::new(&relation.name)?,
                kind: RelationKind::BelongsTo,
                target: relation.target.clone(),
                keys: keys.clone(),
            });

            if let Some(reverse) = &relation.reverse_name {
                accessors
                    .entry(relation.target.clone())
                    .or_default()
                    .push(Accessor {
                        name: Name::new(reverse)?,
                        kind: RelationKind::HasMany,
                        target: model.clone(),
                        keys: KeyPair {
                            from: keys.to,
                            to: keys.from,
                        },
                    });
            }
        }
    }

    for junction in &config.junctions {
        let [r1, r2] = &junction.relations[..] else {
            continue;
        };

        let model = &junction.schema.model;
        let table = &junction.schema.table;

        for (near, far) in [(r1, r2), (r2, r1)] {
            let Some(reverse) = &near.reverse_name else {
                continue;
            };

            let near_keys = resolve(models, model, near);
            let far_keys = resolve(models, model, far);

            accessors
                .entry(near.target.clone())
                .or_default()
                .push(Accessor {
                    name: Name::new(reverse)?,
                    kind: RelationKind::ManyToMany {
                        junction: table.clone(),
                        junction_keys: far_keys,
                    },
                    target: far.target.clone(),
                    keys: KeyPair {
                        from: near_keys.to,
                        to: near_keys.from,
                    },
                });
        }
    }

    Ok(accessors)
}

/// Maps the relation's keys to column names. `from` lives on the declaring
/// model, `to` on the target.
fn resolve(models: &IndexMap<String, Model>, model: &str, relation: &Relation) -> KeyPair {
    let column = |model: &str, key: &str| {
        models
            .get(model)
            .and_then(|model| model.column(key))
            .map(|column| column.column.clone())
            .unwrap_or_else(|| key.to_owned())
    };

    KeyPair {
        from: column(model, &relation.from),
        to: column(&relation.target, &relation.to),
    }
}
