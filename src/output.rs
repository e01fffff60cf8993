use crate::fptree::ItemSet;
use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::rule::Rule;
use std::io;
use std::io::Write;

/// Writes the frequent itemset collection as CSV. Multi-item fields are
/// space separated so they never collide with the column delimiter.
pub fn write_itemsets<W: Write>(
    out: &mut W,
    itemsets: &[ItemSet],
    num_transactions: u32,
    itemizer: &Itemizer,
) -> io::Result<()> {
    writeln!(out, "items,count,support,size")?;
    for itemset in itemsets {
        writeln!(
            out,
            "{},{},{},{}",
            Item::item_vec_to_string(&itemset.items, itemizer),
            itemset.count,
            itemset.support(num_transactions),
            itemset.len()
        )?;
    }
    Ok(())
}

pub fn write_rules<W: Write>(out: &mut W, rules: &[Rule], itemizer: &Itemizer) -> io::Result<()> {
    writeln!(out, "antecedent,consequent,support,confidence,lift,leverage")?;
    for rule in rules {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            Item::item_vec_to_string(&rule.antecedent, itemizer),
            Item::item_vec_to_string(&rule.consequent, itemizer),
            rule.support,
            rule.confidence,
            rule.lift,
            rule.leverage
        )?;
    }
    Ok(())
}
