use indexmap::IndexMap;

use crate::error::ProfileError;
use crate::model::{MacroWeights, MicroWeights, Pool, PoolNode, Profile, ScopedCategories, TagIdWeights};
use crate::readers::Meta;
use crate::rules::builtin;

/// Reader outputs for every section.
#[derive(Debug, Clone)]
pub struct Sections {
    pub meta: Meta,
    pub macro_weights: MacroWeights,
    pub micro: TagIdWeights,
    pub equipment: IndexMap<Pool, ScopedCategories>,
    pub stratagems: ScopedCategories,
}

/// Combine section outputs into the profile document.
///
/// Every pool gets empty pool-wide `tag`/`id` maps; only its categories come
/// from the workbook.
pub fn assemble(sections: Sections) -> Result<Profile, ProfileError> {
    let Sections {
        meta,
        macro_weights,
        micro,
        mut equipment,
        stratagems,
    } = sections;

    let rules = builtin::load_block(meta.rules_block)?;

    let mut stratagems = Some(stratagems);
    let pools = Pool::ALL
        .into_iter()
        .map(|pool| {
            let categories = match pool {
                Pool::Stratagems => stratagems.take().unwrap_or_default(),
                _ => equipment.shift_remove(&pool).unwrap_or_default(),
            };
            let node = PoolNode {
                tag: Default::default(),
                id: Default::default(),
                categories,
            };
            (pool, node)
        })
        .collect();

    Ok(Profile {
        name: meta.name,
        rules_block: meta.rules_block,
        rules,
        macro_weights,
        micro: MicroWeights {
            tag: micro.tag,
            id: micro.id,
            pools,
        },
    })
}
