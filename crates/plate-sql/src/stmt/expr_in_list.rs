use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprInList {
    pub expr: Box<Expr>,
    pub list: Vec<Expr>,
}

impl Expr {
    pub fn in_list(lhs: impl Into<Self>, list: impl IntoIterator<Item = Expr>) -> Self {
        ExprInList {
            expr: Box::new(lhs.into()),
            list: list.into_iter().collect(),
        }
        .into()
    }
}

impl From<ExprInList> for Expr {
    fn from(value: ExprInList) -> Self {
        Self::InList(value)
    }
}
